//! Outbound link opener

use std::process::Command;

use lore_core::prelude::*;

/// Build the program and arguments that open `url`.
///
/// A non-empty `browser` is used as the command (it may carry its own
/// arguments, e.g. `firefox --new-window`). Otherwise the platform opener is
/// used. Returns `None` when no opener is known for this platform.
pub fn opener_command(url: &str, browser: &str) -> Option<(String, Vec<String>)> {
    let mut parts = browser.split_whitespace();
    if let Some(program) = parts.next() {
        let mut args: Vec<String> = parts.map(str::to_string).collect();
        args.push(url.to_string());
        return Some((program.to_string(), args));
    }

    platform_opener(url)
}

#[cfg(target_os = "macos")]
fn platform_opener(url: &str) -> Option<(String, Vec<String>)> {
    Some(("open".to_string(), vec![url.to_string()]))
}

#[cfg(target_os = "windows")]
fn platform_opener(url: &str) -> Option<(String, Vec<String>)> {
    // The empty string is the window title `start` expects before the target
    let args = ["/C", "start", "", url].map(str::to_string).to_vec();
    Some(("cmd".to_string(), args))
}

#[cfg(all(unix, not(target_os = "macos")))]
fn platform_opener(url: &str) -> Option<(String, Vec<String>)> {
    Some(("xdg-open".to_string(), vec![url.to_string()]))
}

#[cfg(not(any(unix, target_os = "windows")))]
fn platform_opener(_url: &str) -> Option<(String, Vec<String>)> {
    None
}

/// Spawn the opener for `url` without waiting for it
pub fn open_url(url: &str, browser: &str) -> Result<()> {
    let (program, args) = opener_command(url, browser)
        .ok_or_else(|| Error::opener(url, "no browser opener available for this platform"))?;

    debug!("Opening {} with {} {:?}", url, program, args);
    Command::new(&program)
        .args(&args)
        .spawn()
        .map_err(|e| Error::opener(url, format!("{program}: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_browser_gets_url_last() {
        let (program, args) = opener_command("https://x.com", "firefox --new-window").unwrap();
        assert_eq!(program, "firefox");
        assert_eq!(args, vec!["--new-window", "https://x.com"]);
    }

    #[test]
    fn test_blank_browser_falls_back_to_platform() {
        let custom = opener_command("https://x.com", "   ");
        let platform = opener_command("https://x.com", "");
        assert_eq!(custom, platform);
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    #[test]
    fn test_linux_uses_xdg_open() {
        let (program, args) = opener_command("https://x.com", "").unwrap();
        assert_eq!(program, "xdg-open");
        assert_eq!(args, vec!["https://x.com"]);
    }

    #[test]
    fn test_missing_program_is_opener_error() {
        let err = open_url("https://x.com", "definitely-not-a-browser-7f3a").unwrap_err();
        assert!(matches!(err, Error::Opener { .. }));
        assert!(err.is_recoverable());
    }
}
