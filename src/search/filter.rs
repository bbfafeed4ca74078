use std::fmt;

use clap::ValueEnum;

/// Result-kind filter forwarded to the results page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Filter {
    #[default]
    All,
    Videos,
    Channels,
    Playlists,
}

impl Filter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Videos => "videos",
            Filter::Channels => "channels",
            Filter::Playlists => "playlists",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
