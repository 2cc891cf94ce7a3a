use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::Result;

pub const OUTPUT_FILE: &str = "waypoints.txt";

pub struct Waypoint {
    pub name: String,
    pub x: i32, // Image-space coordinates at native resolution
    pub y: i32,
}

impl Waypoint {
    pub fn new(name: String, x: i32, y: i32) -> Self {
        Self { name, x, y }
    }

    /// Formats the waypoint as one line of the output template.
    pub fn format_line(&self) -> String {
        format!(
            "{}(Region.PLACEHOLDER, WitcherFaction.PLACEHOLDER, {}, {}),",
            self.name, self.x, self.y
        )
    }

    /// Appends the formatted line to the given file, creating it if absent.
    /// The file handle is released before returning.
    pub fn append_line(&self, path: &Path) -> Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", self.format_line())?;
        Ok(())
    }
}
