use anyhow::Context;
use rvr_gameplay::Table;
use std::path::Path;

/// Reads a table snapshot from a JSON file.
pub fn load(path: &Path) -> anyhow::Result<Table> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let table = serde_json::from_str::<Table>(&text).with_context(|| format!("parsing {}", path.display()))?;
    log::debug!("loaded table from {}", path.display());
    Ok(table)
}

/// Writes a table snapshot as pretty JSON, or prints it when no path is given.
pub fn save(table: &Table, path: Option<&Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(table)?;
    match path {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            log::info!("saved table to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rvr_cards::*;
    use rvr_gameplay::*;
    use rvr_ranges::Range;

    #[test]
    fn json_round_trip() {
        let table = Table::new(
            Structure::Limit,
            2,
            vec![
                Player::from((Combo::try_from("AsAh").unwrap(), Range::try_from("AA(5),22,72o").unwrap(), 100)),
                Player::from((Combo::try_from("KsKh").unwrap(), Range::try_from("anything").unwrap(), 100)),
            ],
        )
        .with_board(Street::Flop, Board::try_from("2c3d4h").unwrap())
        .with_pot(12);
        let json = serde_json::to_string(&table).unwrap();
        assert!(json.contains("\"AA(5),72o,22\""));
        assert!(json.contains("\"limit\""));
        assert_eq!(serde_json::from_str::<Table>(&json).unwrap(), table);
    }

    #[test]
    fn file_round_trip() {
        let table = Table::new(
            Structure::NoLimit,
            2,
            vec![
                Player::from((Combo::try_from("AsAh").unwrap(), Range::try_from("AA").unwrap(), 100)),
                Player::from((Combo::try_from("KsKh").unwrap(), Range::try_from("KK").unwrap(), 100)),
            ],
        );
        let path = std::env::temp_dir().join(format!("drill-{}.json", std::process::id()));
        save(&table, Some(&path)).unwrap();
        assert_eq!(load(&path).unwrap(), table);
        std::fs::remove_file(path).unwrap();
    }
}
