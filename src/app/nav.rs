// src/app/nav.rs — route values standing in for the original page URLs.
//
// Each page reads its state exclusively from `page`, `query` and `id`
// parameters; the current `Route` is the only durable per-page state, so page
// controls rewrite the route rather than patching ad-hoc fields.

use std::fmt;

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home { page: u32 },
    Search { query: String, page: u32 },
    Genre { id: i64, page: u32 },
    Detail { id: u64 },
    /// Unroutable entry (e.g. detail without an id): renders a message,
    /// issues zero fetches.
    Blocked { message: String },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RouteError {
    #[error("missing required parameter `{0}`")]
    MissingInput(&'static str),

    #[error("unknown page `{0}`")]
    UnknownPage(String),
}

impl Default for Route {
    fn default() -> Self {
        Self::Home { page: 1 }
    }
}

impl Route {
    pub fn blocked(err: &RouteError) -> Self {
        Self::Blocked {
            message: err.to_string(),
        }
    }

    /// Parse a deep link of the form `page?query-string`, e.g.
    /// `search?query=batman&page=2` or `detail?id=603`. A bare page name
    /// (`home`) is a valid link with defaults applied.
    pub fn parse_arg(arg: &str) -> Result<Self, RouteError> {
        let (name, qs) = match arg.split_once('?') {
            Some((n, q)) => (n, q),
            None => (arg, ""),
        };
        Self::parse(name, qs)
    }

    pub fn parse(page_name: &str, query_string: &str) -> Result<Self, RouteError> {
        let params = parse_query(query_string);
        let lookup = |key: &str| {
            params
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };
        let page = clamp_page(lookup("page"));

        match page_name.trim() {
            "" | "home" | "main" => Ok(Self::Home { page }),
            "search" => {
                let query = lookup("query").unwrap_or("").trim().to_string();
                if query.is_empty() {
                    return Err(RouteError::MissingInput("query"));
                }
                Ok(Self::Search { query, page })
            }
            "genre" => {
                let id = lookup("id")
                    .and_then(|v| v.parse::<i64>().ok())
                    .ok_or(RouteError::MissingInput("id"))?;
                Ok(Self::Genre { id, page })
            }
            "detail" => {
                let id = lookup("id")
                    .and_then(|v| v.parse::<u64>().ok())
                    .ok_or(RouteError::MissingInput("id"))?;
                Ok(Self::Detail { id })
            }
            other => Err(RouteError::UnknownPage(other.to_string())),
        }
    }

    pub fn page_name(&self) -> &'static str {
        match self {
            Self::Home { .. } => "home",
            Self::Search { .. } => "search",
            Self::Genre { .. } => "genre",
            Self::Detail { .. } => "detail",
            Self::Blocked { .. } => "blocked",
        }
    }

    pub fn to_query_string(&self) -> String {
        match self {
            Self::Home { page } => format!("page={page}"),
            Self::Search { query, page } => {
                format!("query={}&page={page}", urlencoding::encode(query))
            }
            Self::Genre { id, page } => format!("id={id}&page={page}"),
            Self::Detail { id } => format!("id={id}"),
            Self::Blocked { .. } => String::new(),
        }
    }

    pub fn page(&self) -> u32 {
        match self {
            Self::Home { page } | Self::Search { page, .. } | Self::Genre { page, .. } => *page,
            Self::Detail { .. } | Self::Blocked { .. } => 1,
        }
    }

    /// Same route with only the page number rewritten — a pagination link
    /// keeps the query or genre id of the page it is embedded in.
    pub fn with_page(&self, page: u32) -> Self {
        let page = page.max(1);
        match self {
            Self::Home { .. } => Self::Home { page },
            Self::Search { query, .. } => Self::Search {
                query: query.clone(),
                page,
            },
            Self::Genre { id, .. } => Self::Genre { id: *id, page },
            other => other.clone(),
        }
    }

    pub fn is_paginated(&self) -> bool {
        matches!(
            self,
            Self::Home { .. } | Self::Search { .. } | Self::Genre { .. }
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let qs = self.to_query_string();
        if qs.is_empty() {
            write!(f, "{}", self.page_name())
        } else {
            write!(f, "{}?{}", self.page_name(), qs)
        }
    }
}

fn clamp_page(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.parse::<i64>().ok())
        .map(|n| if n < 1 { 1 } else { n.min(u32::MAX as i64) as u32 })
        .unwrap_or(1)
}

fn parse_query(qs: &str) -> Vec<(String, String)> {
    qs.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            let decode = |s: &str| {
                urlencoding::decode(&s.replace('+', " "))
                    .map(|c| c.into_owned())
                    .unwrap_or_else(|_| s.to_string())
            };
            (decode(k), decode(v))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_four_pages() {
        assert_eq!(Route::parse_arg("home"), Ok(Route::Home { page: 1 }));
        assert_eq!(Route::parse_arg("home?page=3"), Ok(Route::Home { page: 3 }));
        assert_eq!(
            Route::parse_arg("search?query=batman&page=2"),
            Ok(Route::Search {
                query: "batman".into(),
                page: 2
            })
        );
        assert_eq!(
            Route::parse_arg("genre?id=28"),
            Ok(Route::Genre { id: 28, page: 1 })
        );
        assert_eq!(Route::parse_arg("detail?id=603"), Ok(Route::Detail { id: 603 }));
    }

    #[test]
    fn page_is_clamped_to_at_least_one() {
        assert_eq!(Route::parse_arg("home?page=0"), Ok(Route::Home { page: 1 }));
        assert_eq!(Route::parse_arg("home?page=-4"), Ok(Route::Home { page: 1 }));
        assert_eq!(Route::parse_arg("home?page=junk"), Ok(Route::Home { page: 1 }));
    }

    #[test]
    fn missing_required_params_short_circuit() {
        assert_eq!(
            Route::parse_arg("detail"),
            Err(RouteError::MissingInput("id"))
        );
        assert_eq!(
            Route::parse_arg("detail?id=abc"),
            Err(RouteError::MissingInput("id"))
        );
        assert_eq!(
            Route::parse_arg("search?page=2"),
            Err(RouteError::MissingInput("query"))
        );
        assert_eq!(
            Route::parse_arg("genre?page=1"),
            Err(RouteError::MissingInput("id"))
        );
    }

    #[test]
    fn unknown_page_is_rejected() {
        assert_eq!(
            Route::parse_arg("admin?page=1"),
            Err(RouteError::UnknownPage("admin".into()))
        );
    }

    #[test]
    fn query_values_are_decoded() {
        assert_eq!(
            Route::parse_arg("search?query=the%20matrix"),
            Ok(Route::Search {
                query: "the matrix".into(),
                page: 1
            })
        );
        assert_eq!(
            Route::parse_arg("search?query=spider+man"),
            Ok(Route::Search {
                query: "spider man".into(),
                page: 1
            })
        );
    }

    #[test]
    fn with_page_preserves_route_context() {
        let search = Route::Search {
            query: "batman".into(),
            page: 2,
        };
        assert_eq!(
            search.with_page(5),
            Route::Search {
                query: "batman".into(),
                page: 5
            }
        );
        let genre = Route::Genre { id: 28, page: 1 };
        assert_eq!(genre.with_page(3), Route::Genre { id: 28, page: 3 });
        assert_eq!(genre.with_page(0), Route::Genre { id: 28, page: 1 });

        let detail = Route::Detail { id: 603 };
        assert_eq!(detail.with_page(9), detail);
    }

    #[test]
    fn round_trips_through_query_string() {
        for arg in [
            "home?page=4",
            "search?query=two%20words&page=7",
            "genre?id=16&page=2",
            "detail?id=550",
        ] {
            let route = Route::parse_arg(arg).unwrap();
            let back = Route::parse_arg(&route.to_string()).unwrap();
            assert_eq!(route, back);
        }
    }
}
