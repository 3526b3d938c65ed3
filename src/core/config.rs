use std::str::FromStr;

/// Optional effects, switched from the `data-fx` attribute on `<body>`.
///
/// Tokens are whitespace separated: `cursor` opts into the custom cursor,
/// `no-grid`, `no-tilt`, `no-parallax` and `no-magnetic` opt out of the
/// default-on effects. Unknown tokens are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Features {
    pub grid: bool,
    pub tilt: bool,
    pub parallax: bool,
    pub magnetic: bool,
    pub cursor: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            grid: true,
            tilt: true,
            parallax: true,
            magnetic: true,
            cursor: false,
        }
    }
}

impl Features {
    pub fn from_attr(attr: Option<&str>) -> Self {
        let mut f = Self::default();
        for token in attr.unwrap_or_default().split_whitespace() {
            match token.to_ascii_lowercase().as_str() {
                "cursor" => f.cursor = true,
                "no-cursor" => f.cursor = false,
                "no-grid" => f.grid = false,
                "no-tilt" => f.tilt = false,
                "no-parallax" => f.parallax = false,
                "no-magnetic" => f.magnetic = false,
                _ => {}
            }
        }
        f
    }
}

/// Console log level from `data-log-level`; anything unrecognised is `Info`.
pub fn log_level(attr: Option<&str>) -> log::Level {
    attr.and_then(|s| log::Level::from_str(s.trim()).ok())
        .unwrap_or(log::Level::Info)
}
