use clap::Parser;

mod config;
mod content;
mod gui;
mod position;
mod state;

// --- CLI Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about = "Personal portfolio viewer.", long_about = None)]
struct Cli {
    /// Start with the window fullscreen
    #[arg(long)]
    fullscreen: bool,

    /// Force touch-only input handling regardless of window width
    #[arg(long)]
    touch: bool,

    /// Skip the one-time camera flight to the home location
    #[arg(long)]
    no_fly: bool,

    /// Window size override, e.g. 1280x720
    #[arg(long, value_name = "WxH")]
    window_size: Option<String>,
}

impl Cli {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref s) = self.window_size
            && parse_window_size(s).is_none()
        {
            return Err(format!(
                "Invalid --window-size '{}'. Expected WIDTHxHEIGHT, e.g. 1280x720.",
                s
            ));
        }
        Ok(())
    }
}

fn parse_window_size(s: &str) -> Option<(u32, u32)> {
    let (w, h) = s.split_once(['x', 'X'])?;
    let w: u32 = w.trim().parse().ok()?;
    let h: u32 = h.trim().parse().ok()?;
    if w == 0 || h == 0 {
        return None;
    }
    Some((w, h))
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let mut cfg = config::load().unwrap_or_else(|e| {
        eprintln!("Config error: {e}. Using defaults.");
        config::Config::default()
    });

    if let Some((w, h)) = args.window_size.as_deref().and_then(parse_window_size) {
        cfg.gui.width = Some(w);
        cfg.gui.height = Some(h);
    }

    let app = gui::GuiApp::new(cfg.gui, args.touch, args.no_fly, args.fullscreen);
    if let Err(e) = app.run() {
        eprintln!("GUI Error: {}", e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_window_size() {
        assert_eq!(parse_window_size("1280x720"), Some((1280, 720)));
        assert_eq!(parse_window_size("1920X1080"), Some((1920, 1080)));
        assert_eq!(parse_window_size(" 800 x 600 "), Some((800, 600)));
        assert_eq!(parse_window_size("0x600"), None);
        assert_eq!(parse_window_size("800"), None);
        assert_eq!(parse_window_size("wide x tall"), None);
    }
}
