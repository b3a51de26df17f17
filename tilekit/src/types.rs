use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Grade options offered by the creation form.
pub const GRADES: [&str; 5] = ["BIa", "BIb", "BIIa", "BIIb", "BIII"];

/// Surface finish options (glazed / unglazed).
pub const FINISHES: [&str; 2] = ["GL", "UGL"];

/// Edge type options.
pub const TILE_TYPES: [&str; 2] = ["Rectified", "Non-Rectified"];

pub const STATUS_ACTIVE: &str = "Sampel Aktif";
pub const STATUS_INACTIVE: &str = "Sampel Nonaktif";

pub const STATUSES: [&str; 2] = [STATUS_ACTIVE, STATUS_INACTIVE];

/// One tile sample entry as stored in the inventory sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileRecord {
    pub id: String,
    pub entry_date: String,
    pub brand: String,
    pub manufacturer: String,
    pub grade: String,
    pub working_size: String,
    pub finish: String,
    #[serde(rename = "type")]
    pub tile_type: String,
    #[serde(rename = "lokasiSampel")]
    pub location: String,
    pub status: String,
}

impl TileRecord {
    /// Attach a fresh client-side identifier to a draft.
    pub fn from_draft(draft: TileDraft) -> Self {
        Self {
            id: generate_id(),
            entry_date: draft.entry_date,
            brand: draft.brand,
            manufacturer: draft.manufacturer,
            grade: draft.grade,
            working_size: draft.working_size,
            finish: draft.finish,
            tile_type: draft.tile_type,
            location: draft.location,
            status: draft.status,
        }
    }

    /// Rows without a brand or an entry date are not shown anywhere.
    pub fn is_valid(&self) -> bool {
        !self.brand.is_empty() && !self.entry_date.is_empty()
    }

    pub fn is_active(&self) -> bool {
        self.status == STATUS_ACTIVE
    }
}

/// A record as collected by the creation form, before it has an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileDraft {
    pub entry_date: String,
    pub brand: String,
    pub manufacturer: String,
    pub grade: String,
    pub working_size: String,
    pub finish: String,
    #[serde(rename = "type")]
    pub tile_type: String,
    #[serde(rename = "lokasiSampel")]
    pub location: String,
    pub status: String,
}

impl TileDraft {
    /// Names of the required free-text fields that are still blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.brand.trim().is_empty() {
            missing.push("brand");
        }
        if self.manufacturer.trim().is_empty() {
            missing.push("manufacturer");
        }
        if self.working_size.trim().is_empty() {
            missing.push("working size");
        }
        if self.location.trim().is_empty() {
            missing.push("storage location");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

impl Default for TileDraft {
    fn default() -> Self {
        Self {
            entry_date: Local::now().format("%Y-%m-%d").to_string(),
            brand: String::new(),
            manufacturer: String::new(),
            grade: GRADES[0].to_string(),
            working_size: String::new(),
            finish: FINISHES[0].to_string(),
            tile_type: TILE_TYPES[0].to_string(),
            location: String::new(),
            status: STATUS_ACTIVE.to_string(),
        }
    }
}

/// Column a table view can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    EntryDate,
    Brand,
    Manufacturer,
    Grade,
    WorkingSize,
    Finish,
    TileType,
    Location,
    Status,
}

impl SortField {
    /// Columns in table order.
    pub const TABLE_COLUMNS: [SortField; 8] = [
        SortField::EntryDate,
        SortField::Brand,
        SortField::Manufacturer,
        SortField::Grade,
        SortField::WorkingSize,
        SortField::Finish,
        SortField::Location,
        SortField::Status,
    ];

    pub fn value<'a>(&self, record: &'a TileRecord) -> &'a str {
        match self {
            SortField::EntryDate => &record.entry_date,
            SortField::Brand => &record.brand,
            SortField::Manufacturer => &record.manufacturer,
            SortField::Grade => &record.grade,
            SortField::WorkingSize => &record.working_size,
            SortField::Finish => &record.finish,
            SortField::TileType => &record.tile_type,
            SortField::Location => &record.location,
            SortField::Status => &record.status,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortField::EntryDate => "Entry Date",
            SortField::Brand => "Brand",
            SortField::Manufacturer => "Manufacturer",
            SortField::Grade => "Grade",
            SortField::WorkingSize => "Working Size",
            SortField::Finish => "GL/UGL",
            SortField::TileType => "Type",
            SortField::Location => "Location",
            SortField::Status => "Status",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

/// Transient user-facing message kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Where the initial load currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

pub(crate) fn generate_id() -> String {
    format!("tile-{}", Uuid::new_v4().simple())
}
