use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::character::Character;
use crate::error::{CoreError, CoreResult};
use crate::roster::Roster;

/// The columns a roster CSV must carry, in canonical order.
pub const COLUMNS: [&str; 11] = [
    "name",
    "level",
    "ascension",
    "talent_basic_atk",
    "talent_skill",
    "talent_forte",
    "talent_liberation",
    "talent_intro",
    "sequence",
    "element",
    "quality",
];

/// Default location of the roster export.
pub const DEFAULT_ROSTER_PATH: &str = "~/.local/share/gaming_tools/data/wuwa_characters.csv";

/// Expand a leading `~` to the current user's home directory.
///
/// Paths without a leading `~`, or when `HOME` is unset, are returned as-is.
pub fn expand_home(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => return PathBuf::from(path),
    };
    match std::env::var_os("HOME") {
        Some(home) => {
            let mut expanded = PathBuf::from(home);
            let rest = rest.trim_start_matches('/');
            if !rest.is_empty() {
                expanded.push(rest);
            }
            expanded
        }
        None => PathBuf::from(path),
    }
}

/// Load a roster from a CSV file on disk.
pub fn load_roster(path: &Path) -> CoreResult<Roster> {
    let file = File::open(path).map_err(|source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let roster = read_roster(file)?;
    tracing::info!(path = %path.display(), characters = roster.len(), "loaded roster");
    Ok(roster)
}

/// Read a roster from any CSV source.
///
/// The header row may list the columns in any order, but must contain
/// each column in [`COLUMNS`] exactly once.
pub fn read_roster<R: Read>(source: R) -> CoreResult<Roster> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(source);
    let headers = reader.headers()?.clone();
    let layout = ColumnLayout::from_headers(&headers)?;

    let mut characters = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        characters.push(layout.parse(&record, i + 1)?);
    }
    Ok(Roster::new(characters))
}

/// Position of each known column within the header row.
struct ColumnLayout {
    positions: [usize; COLUMNS.len()],
}

impl ColumnLayout {
    fn from_headers(headers: &StringRecord) -> CoreResult<Self> {
        let unknown: Vec<String> = headers
            .iter()
            .filter(|h| !COLUMNS.contains(h))
            .map(str::to_string)
            .collect();
        if !unknown.is_empty() {
            return Err(CoreError::UnknownColumns(unknown));
        }

        let mut positions = [0; COLUMNS.len()];
        for (slot, column) in positions.iter_mut().zip(COLUMNS) {
            let mut matches = headers.iter().enumerate().filter(|(_, h)| *h == column);
            *slot = match (matches.next(), matches.next()) {
                (Some((i, _)), None) => i,
                (Some(_), Some(_)) => return Err(CoreError::DuplicateColumn(column)),
                (None, _) => return Err(CoreError::MissingColumn(column)),
            };
        }
        Ok(Self { positions })
    }

    fn cell<'r>(&self, record: &'r StringRecord, column: usize) -> &'r str {
        record.get(self.positions[column]).unwrap_or("")
    }

    fn int(&self, record: &StringRecord, column: usize, row: usize) -> CoreResult<i32> {
        let value = self.cell(record, column);
        value.parse().map_err(|_| CoreError::InvalidValue {
            row,
            column: COLUMNS[column],
            value: value.to_string(),
        })
    }

    fn parse(&self, record: &StringRecord, row: usize) -> CoreResult<Character> {
        Ok(Character {
            name: self.cell(record, 0).to_string(),
            level: self.int(record, 1, row)?,
            ascension: self.int(record, 2, row)?,
            talent_basic_atk: self.int(record, 3, row)?,
            talent_skill: self.int(record, 4, row)?,
            talent_forte: self.int(record, 5, row)?,
            talent_liberation: self.int(record, 6, row)?,
            talent_intro: self.int(record, 7, row)?,
            sequence: self.int(record, 8, row)?,
            element: self.cell(record, 9).to_string(),
            quality: self.int(record, 10, row)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::character::CharacterId;

    const HEADER: &str = "name,level,ascension,talent_basic_atk,talent_skill,talent_forte,talent_liberation,talent_intro,sequence,element,quality";

    #[test]
    fn reads_valid_rows() {
        let csv = format!(
            "{HEADER}\nJinhsi,90,6,10,10,10,10,10,0,Spectro,5\nSanhua,80,5,6,6,6,6,6,6,Glacio,4\n"
        );
        let roster = read_roster(csv.as_bytes()).unwrap();
        assert_eq!(roster.len(), 2);
        let sanhua = roster.get(CharacterId(1)).unwrap();
        assert_eq!(sanhua.name, "Sanhua");
        assert_eq!(sanhua.sequence, 6);
        assert_eq!(sanhua.element, "Glacio");
        assert_eq!(sanhua.quality, 4);
    }

    #[test]
    fn columns_in_any_order() {
        let csv = "quality,element,sequence,talent_intro,talent_liberation,talent_forte,talent_skill,talent_basic_atk,ascension,level,name\n5,Fusion,1,2,3,4,5,6,7,80,Changli\n";
        let roster = read_roster(csv.as_bytes()).unwrap();
        let c = roster.get(CharacterId(0)).unwrap();
        assert_eq!(c.name, "Changli");
        assert_eq!(c.level, 80);
        assert_eq!(c.ascension, 7);
        assert_eq!(c.talent_basic_atk, 6);
        assert_eq!(c.talent_intro, 2);
    }

    #[test]
    fn header_only_is_empty_roster() {
        let roster = read_roster(format!("{HEADER}\n").as_bytes()).unwrap();
        assert!(roster.is_empty());
    }

    #[test]
    fn trims_whitespace() {
        let csv = format!("{HEADER}\n Yinlin , 70 ,4,5,5,5,5,5,0, Electro ,5\n");
        let roster = read_roster(csv.as_bytes()).unwrap();
        let c = roster.get(CharacterId(0)).unwrap();
        assert_eq!(c.name, "Yinlin");
        assert_eq!(c.level, 70);
        assert_eq!(c.element, "Electro");
    }

    #[test]
    fn rejects_unknown_columns() {
        let csv = format!("{HEADER},weapon,rank\n");
        let err = read_roster(csv.as_bytes()).unwrap_err();
        match err {
            CoreError::UnknownColumns(cols) => assert_eq!(cols, vec!["weapon", "rank"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_missing_column() {
        let csv = "name,level,ascension,talent_basic_atk,talent_skill,talent_forte,talent_liberation,talent_intro,sequence,element\n";
        let err = read_roster(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CoreError::MissingColumn("quality")));
    }

    #[test]
    fn rejects_non_integer() {
        let csv = format!("{HEADER}\nJiyan,90,6,ten,10,10,10,10,0,Aero,5\n");
        let err = read_roster(csv.as_bytes()).unwrap_err();
        match err {
            CoreError::InvalidValue { row, column, value } => {
                assert_eq!(row, 1);
                assert_eq!(column, "talent_basic_atk");
                assert_eq!(value, "ten");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_duplicate_column() {
        let csv = format!("{HEADER},level\nJiyan,90,6,10,10,10,10,10,0,Aero,5,1\n");
        let err = read_roster(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateColumn("level")));
        assert_eq!(err.to_string(), "duplicate column: level");
    }

    #[test]
    fn accepts_negative_numbers() {
        let csv = format!("{HEADER}\nRover,-1,0,1,1,1,1,1,-2,Havoc,5\n");
        let roster = read_roster(csv.as_bytes()).unwrap();
        let c = roster.get(CharacterId(0)).unwrap();
        assert_eq!(c.level, -1);
        assert_eq!(c.sequence, -2);
    }

    #[test]
    fn rejects_short_row() {
        let csv = format!("{HEADER}\nJiyan,90,6\n");
        let err = read_roster(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CoreError::Csv(_)));
    }

    #[test]
    fn keeps_duplicate_rows() {
        let row = "Rover,90,6,10,10,10,10,10,6,Spectro,5";
        let csv = format!("{HEADER}\n{row}\n{row}\n");
        let roster = read_roster(csv.as_bytes()).unwrap();
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roster.csv");
        fs::write(&path, format!("{HEADER}\nEncore,90,6,9,9,9,9,9,0,Fusion,5\n")).unwrap();
        let roster = load_roster(&path).unwrap();
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_roster(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, CoreError::Io { .. }));
        assert!(err.to_string().contains("nope.csv"));
    }

    #[test]
    fn expand_home_leaves_plain_paths() {
        assert_eq!(expand_home("data/roster.csv"), PathBuf::from("data/roster.csv"));
        assert_eq!(expand_home("~user/x"), PathBuf::from("~user/x"));
    }

    #[test]
    fn expand_home_uses_home() {
        let Some(home) = std::env::var_os("HOME") else {
            return;
        };
        let expanded = expand_home("~/.local/share/x.csv");
        assert_eq!(expanded, PathBuf::from(home).join(".local/share/x.csv"));
    }
}
