//! Textual map format
//!
//! One line per city with at least one road:
//!
//! ```text
//! Foo north=Bar west=Baz south=Qu-ux
//! Bar south=Foo west=Bee
//! ```
//!
//! Each `direction=city` token stands on its own; the format does not require
//! roads to be symmetric. Cities without roads cannot be written.

use std::io::{BufRead, Write};

use log::warn;

use super::city_map::CityMap;
use super::error::{InvasionError, Result};
use super::types::Direction;

/// Read a city map, splitting tokens on `delimiter` or on whitespace when `None`
///
/// Cities that only appear as a road target are created without roads.
pub fn read_city_map<R: BufRead>(reader: R, delimiter: Option<char>) -> Result<CityMap> {
    let mut map = CityMap::new();

    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        let mut tokens: Box<dyn Iterator<Item = &str> + '_> = match delimiter {
            Some(delimiter) => Box::new(
                line.split(delimiter)
                    .map(str::trim)
                    .filter(|t| !t.is_empty()),
            ),
            None => Box::new(line.split_whitespace()),
        };

        let Some(city_name) = tokens.next() else {
            continue;
        };
        map.add_city(city_name);

        for token in tokens {
            let parts: Vec<&str> = token.split('=').collect();
            let [keyword, target] = parts.as_slice() else {
                return Err(malformed_road(line_number, token));
            };
            if keyword.is_empty() || target.is_empty() {
                return Err(malformed_road(line_number, token));
            }

            match keyword.parse::<Direction>() {
                Ok(direction) => map.connect(city_name, direction, target),
                Err(_) => warn!(
                    "line {}: skipping road with unknown direction '{}'",
                    line_number + 1,
                    keyword
                ),
            }
        }
    }

    Ok(map)
}

fn malformed_road(line_number: usize, token: &str) -> InvasionError {
    InvasionError::InvalidInput(format!(
        "line {}: malformed road '{}', expected direction=city",
        line_number + 1,
        token
    ))
}

/// One output line per city with roads, in name order
fn city_lines(map: &CityMap) -> impl Iterator<Item = String> + '_ {
    map.cities().filter(|city| !city.is_isolated()).map(|city| {
        let mut line = city.name.clone();
        for (direction, neighbor) in city.roads() {
            line.push(' ');
            line.push_str(direction.keyword());
            line.push('=');
            line.push_str(neighbor);
        }
        line
    })
}

/// Write every city that has at least one road, in name order
pub fn write_city_map<W: Write>(map: &CityMap, mut writer: W) -> Result<()> {
    for line in city_lines(map) {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(())
}

/// Render a city map in the textual format
pub fn format_city_map(map: &CityMap) -> String {
    let mut text = String::new();
    for line in city_lines(map) {
        text.push_str(&line);
        text.push('\n');
    }
    text
}
