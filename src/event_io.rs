// JSON event plumbing for the operation binaries
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use eyre::{Result, WrapErr};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Read one JSON event from the file named by the first CLI argument, or from stdin.
pub fn read_event<T: DeserializeOwned>() -> Result<T> {
    match std::env::args().nth(1) {
        Some(path) => {
            let file = File::open(&path).wrap_err_with(|| format!("opening event file {path}"))?;
            parse_event(BufReader::new(file))
        }
        None => parse_event(io::stdin().lock()),
    }
}

pub fn parse_event<T: DeserializeOwned, R: Read>(reader: R) -> Result<T> {
    serde_json::from_reader(reader).wrap_err("event is not valid JSON for this operation")
}

/// Pretty-print the operation result to stdout.
pub fn write_output<T: Serialize>(output: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, output)?;
    writeln!(stdout)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::GetStandingsInput;

    #[test]
    fn pass_through_fields_land_in_extra() {
        let input: GetStandingsInput = parse_event(r#"{"team_id": "456", "foo": "bar"}"#.as_bytes()).unwrap();
        assert_eq!(input.team_id, "456");
        assert_eq!(input.name, None);
        assert_eq!(input.extra.get("foo").and_then(|v| v.as_str()), Some("bar"));
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let err = parse_event::<GetStandingsInput, _>(r#"{"foo": "bar"}"#.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("team_id"));
    }
}
