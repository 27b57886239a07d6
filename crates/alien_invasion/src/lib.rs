use std::path::PathBuf;

use alien_invasion_game::{AlienInvasion, Settings, TITLE};
use alien_invasion_sdl2::{SdlContext, SdlInitInfo};
use anyhow::Result;

/// Overrides where sprites and the font are loaded from.
pub const ASSETS_ENV: &str = "ALIEN_INVASION_ASSETS";

pub const FONT: &str = "fonts/DejaVuSans.ttf";

/// Asset directory: `$ALIEN_INVASION_ASSETS`, or the workspace `assets/`.
pub fn assets_dir() -> PathBuf {
    std::env::var_os(ASSETS_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../../assets")))
}

pub fn run() -> Result<()> {
    run_with(Settings::default())
}

pub fn run_with(settings: Settings) -> Result<()> {
    let assets = assets_dir();
    log::info!("Loading assets from '{}'", assets.display());

    let init_info = SdlInitInfo::builder()
        .width(settings.screen_width)
        .height(settings.screen_height)
        .title(TITLE.to_string())
        .font(assets.join(FONT))
        .build();
    SdlContext::run(init_info, |host| AlienInvasion::new(settings, &assets, host))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alien_invasion_game::{ALIEN_IMAGE, SHIP_IMAGE};
    use alien_invasion_sdl2::sdl2::surface::Surface;

    #[test]
    fn bundled_sprites_have_the_expected_sizes() {
        let assets = PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../../assets"));
        for (name, size) in [(SHIP_IMAGE, (60, 48)), (ALIEN_IMAGE, (60, 58))] {
            let surface = Surface::load_bmp(assets.join(name)).unwrap();
            assert_eq!((surface.width(), surface.height()), size, "{}", name);
        }
        assert!(assets.join(FONT).is_file());
    }
}
