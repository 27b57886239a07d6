use alien_invasion_common::{Canvas, Color, Host, Image, Rect};
use anyhow::{Context, Result};

/// Text rendered once by the host and blitted every frame.
pub struct Label {
    text: String,
    image: Image,
    pub rect: Rect,
}

impl Label {
    pub fn render(
        host: &mut dyn Host,
        text: &str,
        size: u16,
        fg: Color,
        bg: Color,
    ) -> Result<Self> {
        let image = host
            .render_text(text, size, fg, bg)
            .with_context(|| format!("failed to render label '{}'", text))?;
        Ok(Label {
            text: text.to_string(),
            image,
            rect: image.rect(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn image(&self) -> Image {
        self.image
    }

    pub fn release(self, host: &mut dyn Host) {
        host.release_image(self.image);
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) -> Result<()> {
        canvas.blit(self.image, self.rect)
    }
}
