use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{anyhow, bail, Context, Result};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseUtil;
use sdl2::render::{Texture, TextureCreator, WindowCanvas};
use sdl2::surface::Surface;
use sdl2::ttf::{Font, Sdl2TtfContext};
use sdl2::video::WindowContext;
use typed_builder::TypedBuilder;

pub use alien_invasion_common;
pub use alien_invasion_common::App;
pub use sdl2;

use alien_invasion_common::{Canvas, Color, Host, Image, InputEvent, Key, Rect};

pub const DEFAULT_FRAME_RATE: u32 = 60;

#[derive(TypedBuilder)]
pub struct SdlInitInfo {
    pub width: u32,
    pub height: u32,
    pub title: String,
    #[builder(default = DEFAULT_FRAME_RATE)]
    pub frame_rate: u32,
    /// TrueType font used by [`Host::render_text`].
    #[builder(default, setter(strip_option))]
    pub font: Option<PathBuf>,
}

pub struct SdlFrontend<'t> {
    canvas: WindowCanvas,
    creator: &'t TextureCreator<WindowContext>,
    ttf: &'t Sdl2TtfContext,
    font_path: Option<PathBuf>,
    fonts: HashMap<u16, Font<'t, 'static>>,
    textures: HashMap<usize, Texture<'t>>,
    next_id: usize,
    mouse: MouseUtil,
}

impl<'t> SdlFrontend<'t> {
    fn store(&mut self, surface: &Surface) -> Result<Image> {
        let texture = self
            .creator
            .create_texture_from_surface(surface)
            .context("failed to create texture")?;
        let image = Image::new(self.next_id, surface.width(), surface.height());
        self.textures.insert(image.id(), texture);
        self.next_id += 1;
        Ok(image)
    }

    /// Fonts are opened once per point size.
    fn font(&mut self, size: u16) -> Result<&Font<'t, 'static>> {
        if !self.fonts.contains_key(&size) {
            let path = self
                .font_path
                .as_deref()
                .ok_or_else(|| anyhow!("no font configured for text rendering"))?;
            let font = self.ttf.load_font(path, size).map_err(|e| {
                anyhow!("failed to load font '{}' at {}pt: {}", path.display(), size, e)
            })?;
            log::debug!("Opened '{}' at {}pt", path.display(), size);
            self.fonts.insert(size, font);
        }
        self.fonts
            .get(&size)
            .ok_or_else(|| anyhow!("font at {}pt missing from cache", size))
    }
}

impl Host for SdlFrontend<'_> {
    fn load_image(&mut self, path: &Path) -> Result<Image> {
        let surface = Surface::load_bmp(path)
            .map_err(|e| anyhow!("failed to load image '{}': {}", path.display(), e))?;
        let image = self
            .store(&surface)
            .with_context(|| format!("failed to upload '{}'", path.display()))?;
        log::debug!(
            "Loaded '{}' ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(image)
    }

    fn render_text(&mut self, text: &str, size: u16, fg: Color, bg: Color) -> Result<Image> {
        if text.is_empty() {
            bail!("cannot render empty text");
        }
        let surface = self
            .font(size)?
            .render(text)
            .shaded(map_color(fg), map_color(bg))
            .map_err(|e| anyhow!("failed to render '{}': {}", text, e))?;
        self.store(&surface)
            .with_context(|| format!("failed to upload text '{}'", text))
    }

    fn release_image(&mut self, image: Image) {
        self.textures.remove(&image.id());
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.mouse.show_cursor(visible);
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

impl Canvas for SdlFrontend<'_> {
    fn clear(&mut self, color: Color) -> Result<()> {
        self.canvas.set_draw_color(map_color(color));
        self.canvas.clear();
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<()> {
        self.canvas.set_draw_color(map_color(color));
        self.canvas
            .fill_rect(map_rect(rect))
            .map_err(|e| anyhow!("failed to fill {:?}: {}", rect, e))
    }

    fn blit(&mut self, image: Image, dest: Rect) -> Result<()> {
        let texture = self
            .textures
            .get(&image.id())
            .ok_or_else(|| anyhow!("no texture loaded for image {}", image.id()))?;
        self.canvas
            .copy(texture, None, Some(map_rect(dest)))
            .map_err(|e| anyhow!("failed to blit image {}: {}", image.id(), e))
    }
}

pub struct SdlContext;

impl SdlContext {
    /// Opens the window, builds the app with `make_app` and runs the frame
    /// loop until the app asks to exit.
    ///
    /// `make_app` receives the host so it can load its images; if it fails,
    /// the loop never starts.
    pub fn run<A, F>(sdl_init_info: SdlInitInfo, make_app: F) -> Result<()>
    where
        A: App,
        F: FnOnce(&mut dyn Host) -> Result<A>,
    {
        let SdlInitInfo {
            width,
            height,
            title,
            frame_rate,
            font,
        } = sdl_init_info;

        let sdl_context = sdl2::init().map_err(|e| anyhow!("failed to initialise SDL2: {}", e))?;
        let video_subsystem = sdl_context
            .video()
            .map_err(|e| anyhow!("failed to initialise SDL2 video: {}", e))?;
        let ttf_context =
            sdl2::ttf::init().map_err(|e| anyhow!("failed to initialise SDL2_ttf: {}", e))?;
        let window = video_subsystem
            .window(&title, width, height)
            .position_centered()
            .build()
            .context("failed to create window")?;
        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .context("failed to create canvas")?;
        let creator = canvas.texture_creator();
        let mut event_pump = sdl_context
            .event_pump()
            .map_err(|e| anyhow!("failed to open event pump: {}", e))?;

        let mut frontend = SdlFrontend {
            canvas,
            creator: &creator,
            ttf: &ttf_context,
            font_path: font,
            fonts: HashMap::new(),
            textures: HashMap::new(),
            next_id: 0,
            mouse: sdl_context.mouse(),
        };

        let mut app = make_app(&mut frontend)?;
        app.init(&mut frontend)?;

        let target_frame = frame_budget(frame_rate);
        loop {
            let frame_start = Instant::now();

            for event in event_pump.poll_iter() {
                if let Some(input) = map_event(&event) {
                    app.handle_event(input, &mut frontend)?;
                }
            }
            if app.should_exit() {
                app.exit();
                break;
            }

            app.update(&mut frontend)?;
            app.draw(&mut frontend)?;
            frontend.canvas.present();

            if let Some(delay) = frame_delay(frame_start.elapsed(), target_frame) {
                std::thread::sleep(delay);
            }
        }

        Ok(())
    }
}

/// Length of one frame at `frame_rate`. Zero falls back to the default rate.
pub fn frame_budget(frame_rate: u32) -> Duration {
    let frame_rate = if frame_rate == 0 {
        log::warn!(
            "Frame rate of 0 requested, capping at {} instead",
            DEFAULT_FRAME_RATE
        );
        DEFAULT_FRAME_RATE
    } else {
        frame_rate
    };
    Duration::from_secs(1) / frame_rate
}

/// How long to sleep after a frame that took `elapsed`. A slow frame is not
/// made up for.
pub fn frame_delay(elapsed: Duration, target: Duration) -> Option<Duration> {
    target.checked_sub(elapsed).filter(|delay| !delay.is_zero())
}

pub fn map_event(event: &Event) -> Option<InputEvent> {
    match *event {
        Event::Quit { .. } => Some(InputEvent::Quit),
        Event::KeyDown {
            keycode: Some(keycode),
            repeat: false,
            ..
        } => Some(InputEvent::KeyDown(map_keycode(keycode))),
        Event::KeyUp {
            keycode: Some(keycode),
            ..
        } => Some(InputEvent::KeyUp(map_keycode(keycode))),
        Event::MouseButtonDown { x, y, .. } => Some(InputEvent::MouseDown { x, y }),
        _ => None,
    }
}

pub fn map_keycode(keycode: Keycode) -> Key {
    match keycode {
        Keycode::Left => Key::Left,
        Keycode::Right => Key::Right,
        Keycode::Space => Key::Space,
        Keycode::Q => Key::Q,
        _ => Key::None,
    }
}

pub fn map_color(color: Color) -> sdl2::pixels::Color {
    let (r, g, b) = color.rgb();
    sdl2::pixels::Color::RGB(r, g, b)
}

pub fn map_rect(rect: Rect) -> sdl2::rect::Rect {
    sdl2::rect::Rect::new(
        rect.x,
        rect.y,
        rect.width.max(0) as u32,
        rect.height.max(0) as u32,
    )
}
