//! Validated query requests.
//!
//! A `Query` is built from the raw arguments that follow a command word
//! (`search ...` or `id ...`). All shape and number checks happen here,
//! before any station data is fetched.

use crate::data::station::Coordinate;
use crate::error::LondonBikesError;
use crate::Result;

use super::matcher::NameMatcher;

/// One of the three supported queries.
#[derive(Debug, Clone)]
pub enum Query {
    /// Stations whose name matches a term
    SearchByName { matcher: NameMatcher },
    /// Stations within `radius_m` metres of `center`
    SearchNearby { center: Coordinate, radius_m: f64 },
    /// One station by id
    LookupById { id: String },
}

impl Query {
    /// Build a search from the arguments after `search`.
    ///
    /// - `<term>` → name search
    /// - `<latitude> <longitude> <radius_in_metres>` → proximity search
    ///
    /// No arguments is [`LondonBikesError::MissingSearchTerm`]; any other
    /// count is [`LondonBikesError::InvalidSearch`].
    pub fn search_from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        match args {
            [] => Err(LondonBikesError::MissingSearchTerm),
            [term] => Ok(Query::SearchByName {
                matcher: NameMatcher::new(term.as_ref())?,
            }),
            [lat, lon, radius] => {
                let latitude = parse_number("latitude", lat.as_ref())?;
                let longitude = parse_number("longitude", lon.as_ref())?;
                let radius_m = parse_number("radius", radius.as_ref())?;
                Ok(Query::SearchNearby {
                    center: Coordinate::new(latitude, longitude),
                    radius_m,
                })
            }
            _ => Err(LondonBikesError::InvalidSearch(format!(
                "expected 1 or 3 arguments, got {}",
                args.len()
            ))),
        }
    }

    /// Build a lookup from the arguments after `id`.
    pub fn id_from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        match args {
            [] => Err(LondonBikesError::MissingId),
            [id] => Ok(Query::LookupById {
                id: id.as_ref().to_string(),
            }),
            _ => Err(LondonBikesError::UnexpectedArguments(
                args.iter()
                    .skip(1)
                    .map(|a| a.as_ref())
                    .collect::<Vec<_>>()
                    .join(" "),
            )),
        }
    }
}

fn parse_number(field: &'static str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| LondonBikesError::NonNumericArgument {
            field,
            value: value.to_string(),
        })
}
