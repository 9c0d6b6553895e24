use std::io::Write;

use crate::{
    error::{ExportError, Result},
    types::Playlist,
};

/// Writes the playlists as a single-line JSON array followed by a newline.
///
/// Keys follow the exported struct fields: `Name` and `Tracks` for playlists,
/// `Name`, `ArtistName`, `AlbumName` and `ReleaseDate` for tracks.
///
/// A playlist without tracks is written as `"Tracks":[]`, never as
/// `"Tracks":null`.
pub fn write_json<W: Write>(playlists: &[Playlist], mut writer: W) -> Result<()> {
    serde_json::to_writer(&mut writer, playlists)?;
    writer.write_all(b"\n").map_err(ExportError::Output)?;
    writer.flush().map_err(ExportError::Output)
}
