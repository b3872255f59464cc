//! Plain-text rendering shared by the one-shot commands and `explore`.

use std::io::{self, Write};

use bhandara_core::{directions_url, Location, Nearby, PointHint};

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", text.chars().take(max).collect::<String>())
    } else {
        text.to_string()
    }
}

pub(crate) fn location_table<'a>(
    out: &mut impl Write,
    locations: impl IntoIterator<Item = &'a Location>,
) -> io::Result<usize> {
    writeln!(out, "{:<5}{:<36}{:<20}{:<22}TIMING", "ID", "NAME", "CITY", "TYPE")?;
    let mut rows = 0;
    for location in locations {
        writeln!(
            out,
            "{:<5}{:<36}{:<20}{:<22}{}",
            location.id,
            truncate(&location.name, 32),
            truncate(&location.city, 18),
            location.category,
            location.timing
        )?;
        rows += 1;
    }
    Ok(rows)
}

pub(crate) fn location_detail(out: &mut impl Write, location: &Location) -> io::Result<()> {
    writeln!(out, "{}", location.name)?;
    writeln!(out, "  {}, {}", location.city, location.country)?;
    writeln!(out, "  Type:        {}", location.category)?;
    writeln!(out, "  Timing:      {}", location.timing)?;
    writeln!(out, "  About:       {}", location.description)?;
    writeln!(out, "  Coordinates: {:.4}, {:.4}", location.lat, location.lng)?;
    writeln!(out, "  Directions:  {}", directions_url(location))
}

pub(crate) fn nearby_list(out: &mut impl Write, nearby: &Nearby<'_>) -> io::Result<()> {
    writeln!(out, "{}", nearby.mode.heading())?;
    if nearby.items.is_empty() {
        writeln!(out, "  nothing within reach")?;
    }
    for ranked in &nearby.items {
        let location = ranked.location;
        match ranked.distance_km {
            Some(km) => writeln!(
                out,
                "  [{}] {} ({}) {km:.1} km",
                location.id, location.name, location.city
            )?,
            None => writeln!(
                out,
                "  [{}] {} ({})",
                location.id, location.name, location.city
            )?,
        }
    }
    if nearby.mode.offers_location_request() {
        writeln!(out, "  (position unknown; pass --lat/--lng or allow location lookup)")?;
    }
    Ok(())
}

pub(crate) fn point_list(out: &mut impl Write, points: &[PointHint]) -> io::Result<()> {
    writeln!(out, "{:<5}{:<10}{:<11}{:<11}TITLE", "ID", "COLOR", "LAT", "LNG")?;
    for point in points {
        writeln!(
            out,
            "{:<5}{:<10}{:<11.4}{:<11.4}{} ({})",
            point.id, point.color, point.lat, point.lng, point.title, point.subtitle
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_names_are_truncated() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijkl", 5), "abcde...");
    }
}
