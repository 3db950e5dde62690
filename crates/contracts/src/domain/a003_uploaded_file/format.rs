/// Value of the file input's `accept` attribute
pub const ACCEPTED_EXTENSIONS: &str = ".pdf,.doc,.docx,.xls,.xlsx,.csv";

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Human readable size with up to two decimals: 1536 -> "1.5 KB"
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, SIZE_UNITS[unit])
}

/// Icon family of an uploaded file, by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Document,
    Spreadsheet,
    Other,
}

impl FileKind {
    pub fn from_name(name: &str) -> Self {
        let extension = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "pdf" | "doc" | "docx" => FileKind::Document,
            "xls" | "xlsx" | "csv" => FileKind::Spreadsheet,
            _ => FileKind::Other,
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            FileKind::Document => "file-text",
            FileKind::Spreadsheet | FileKind::Other => "file",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(500), "500 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(2_621_440), "2.5 MB");
        assert_eq!(format_file_size(1_073_741_824), "1 GB");
        assert_eq!(format_file_size(5 * 1_099_511_627_776), "5120 GB");
    }

    #[test]
    fn test_file_kind() {
        assert_eq!(FileKind::from_name("plan.PDF"), FileKind::Document);
        assert_eq!(FileKind::from_name("team.docx"), FileKind::Document);
        assert_eq!(FileKind::from_name("budget.xlsx"), FileKind::Spreadsheet);
        assert_eq!(FileKind::from_name("README"), FileKind::Other);
        assert_eq!(FileKind::Document.icon_name(), "file-text");
    }
}
