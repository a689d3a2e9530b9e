//! Canvas pixel transformer
//!
//! Legacy pixels name their painter by username and store colors either as
//! hex or as `rgb(r, g, b)`. Canonical pixels carry the account id and a
//! `#rrggbb` color.

use crate::error::{MigrationError, MigrationResult};
use crate::legacy::LegacyCanvasPixel;
use crate::lookup::UsernameIndex;
use crate::records::CanvasPixel;

/// Convert `rgb(r, g, b)` to `#rrggbb`; any other value is returned unchanged
pub fn rgb_to_hex(color: &str) -> MigrationResult<String> {
    let Some(rest) = color.strip_prefix("rgb(") else {
        return Ok(color.to_string());
    };
    let invalid = || MigrationError::InvalidColor(color.to_string());

    let inner = rest.trim_end().strip_suffix(')').ok_or_else(invalid)?;
    let channels = inner
        .split(',')
        .map(|channel| channel.trim().parse::<u8>().map_err(|_| invalid()))
        .collect::<MigrationResult<Vec<u8>>>()?;

    match channels.as_slice() {
        [r, g, b] => Ok(format!("#{:02x}{:02x}{:02x}", r, g, b)),
        _ => Err(invalid()),
    }
}

pub fn canvas_pixel(row: &LegacyCanvasPixel, users: &UsernameIndex) -> MigrationResult<CanvasPixel> {
    Ok(CanvasPixel {
        x: row.x,
        y: row.y,
        user_id: users.resolve(&row.name)?,
        color: rgb_to_hex(&row.color)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::tests::account;

    fn pixel(name: &str, color: &str) -> LegacyCanvasPixel {
        LegacyCanvasPixel {
            name: name.to_string(),
            x: 3,
            y: 4,
            time: "2022-06-01 10:00:00".to_string(),
            color: color.to_string(),
        }
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex("rgb(255, 0, 16)").unwrap(), "#ff0010");
        assert_eq!(rgb_to_hex("rgb(0,255,0)").unwrap(), "#00ff00");
        assert_eq!(rgb_to_hex("rgb( 1 , 2 , 3 )").unwrap(), "#010203");
    }

    #[test]
    fn test_hex_passes_through() {
        assert_eq!(rgb_to_hex("#a1b2c3").unwrap(), "#a1b2c3");
        assert_eq!(rgb_to_hex("ffffff").unwrap(), "ffffff");
    }

    #[test]
    fn test_malformed_rgb() {
        for bad in ["rgb(256, 0, 0)", "rgb(1, 2)", "rgb(1, 2, 3, 4)", "rgb(1, 2, 3", "rgb(a, b, c)"] {
            assert!(
                matches!(rgb_to_hex(bad), Err(MigrationError::InvalidColor(ref v)) if v == bad),
                "{}",
                bad
            );
        }
    }

    #[test]
    fn test_pixel_resolves_username() {
        let users = UsernameIndex::new(&[account(1, "alice")]);

        let converted = canvas_pixel(&pixel("alice", "rgb(0,255,0)"), &users).unwrap();
        assert_eq!(
            converted,
            CanvasPixel {
                x: 3,
                y: 4,
                user_id: 1,
                color: "#00ff00".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_username_fails() {
        let users = UsernameIndex::new(&[account(1, "alice")]);
        let err = canvas_pixel(&pixel("mallory", "#000000"), &users).unwrap_err();
        assert!(matches!(err, MigrationError::UnknownUsername(name) if name == "mallory"));
    }
}
