//! Domain models for recording member verifications in the spreadsheet.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Literal written to the status column for every recorded verification.
pub const VERIFIED_STATUS: &str = "Verified";

/// How a member proved who they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationMethod {
    GovtId,
    Instagram,
    Reddit,
    TikTok,
    Facebook,
    Selfie,
}

impl VerificationMethod {
    /// Every method, in the order the command offers them.
    pub const ALL: [VerificationMethod; 6] = [
        Self::GovtId,
        Self::Instagram,
        Self::Reddit,
        Self::TikTok,
        Self::Facebook,
        Self::Selfie,
    ];

    /// Label shown in the command choice list and written to the sheet.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GovtId => "Govt ID",
            Self::Instagram => "Instagram",
            Self::Reddit => "Reddit",
            Self::TikTok => "TikTok",
            Self::Facebook => "Facebook",
            Self::Selfie => "Selfie",
        }
    }
}

impl fmt::Display for VerificationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a command option does not name a known method.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown verification method '{0}'")]
pub struct UnknownVerificationMethod(pub String);

impl FromStr for VerificationMethod {
    type Err = UnknownVerificationMethod;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str() == value)
            .ok_or_else(|| UnknownVerificationMethod(value.to_string()))
    }
}

/// Parameters for recording one verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyUserParam {
    pub method: VerificationMethod,
    /// Social media handle, only given for social account verifications.
    pub social_username: Option<String>,
    pub discord_username: String,
    pub discord_id: u64,
}

impl VerifyUserParam {
    /// Cell values for the write span, in column order.
    pub fn into_row(self) -> Vec<String> {
        vec![
            self.method.to_string(),
            self.social_username.unwrap_or_default(),
            self.discord_username,
            self.discord_id.to_string(),
            VERIFIED_STATUS.to_string(),
        ]
    }
}

/// Result of a verification attempt that reached the spreadsheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// Record written to this 1-based sheet row.
    Recorded { row: u32 },
    /// The scanned range had no blank username cell; nothing was written.
    NoEmptyRow,
}

/// Where verification rows live in the prefilled sheet.
///
/// Column A holds a prefilled case number, so records are written to B..F starting at the
/// first row whose username column is blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    /// First data row, 1-based.
    pub start_row: u32,
    /// Column scanned for blank cells (the Discord username column).
    pub scan_column: String,
    pub first_write_column: String,
    pub last_write_column: String,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            start_row: 9,
            scan_column: "D".to_string(),
            first_write_column: "B".to_string(),
            last_write_column: "F".to_string(),
        }
    }
}

impl SheetLayout {
    /// Open-ended range covering the scan column from the start row down.
    pub fn scan_range(&self) -> String {
        format!("{}{}:{}", self.scan_column, self.start_row, self.scan_column)
    }

    /// The write span on a single row.
    pub fn write_range(&self, row: u32) -> String {
        format!(
            "{}{}:{}{}",
            self.first_write_column, row, self.last_write_column, row
        )
    }

    /// Finds the first blank row in values read from `scan_range`.
    ///
    /// A row is blank when its first cell is missing or whitespace-only. Returns the 1-based
    /// sheet row number, or `None` when every returned row is filled.
    pub fn first_blank_row(&self, rows: &[Vec<String>]) -> Option<u32> {
        rows.iter()
            .position(|row| row.first().is_none_or(|cell| cell.trim().is_empty()))
            .and_then(|index| u32::try_from(index).ok())
            .map(|index| self.start_row + index)
    }
}
