use manhattan_core::geopoint::GeoPoint;

/// Parses `"lat,lng"`, e.g. `19.4326,-99.1332`.
pub fn parse_point(input: &str) -> Result<GeoPoint, String> {
    let (lat, lng) = input
        .split_once(',')
        .ok_or_else(|| String::from("Expected a point as 'lat,lng'"))?;

    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("Invalid latitude '{}'", lat.trim()))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .map_err(|_| format!("Invalid longitude '{}'", lng.trim()))?;

    if !(-90.0..=90.0).contains(&lat) {
        return Err(format!("Latitude {lat} out of range"));
    }
    if !(-180.0..=180.0).contains(&lng) {
        return Err(format!("Longitude {lng} out of range"));
    }

    Ok(GeoPoint::new(lat, lng))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        assert_eq!(
            parse_point("19.4326,-99.1332"),
            Ok(GeoPoint::new(19.4326, -99.1332))
        );
        assert_eq!(
            parse_point(" 19.4 , -99.1 "),
            Ok(GeoPoint::new(19.4, -99.1))
        );
    }

    #[test]
    fn test_parse_point_errors() {
        assert!(parse_point("19.4").is_err());
        assert!(parse_point("north,-99.1").is_err());
        assert!(parse_point("19.4,west").is_err());
        assert!(parse_point("91,0").is_err());
        assert!(parse_point("0,181").is_err());
        assert!(parse_point("NaN,0").is_err());
    }
}
