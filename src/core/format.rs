use crate::core::FlyOver;
use chrono::{LocalResult, TimeZone, Utc};

pub fn format_fly_over(pass: &FlyOver) -> String {
    match Utc.timestamp_opt(pass.risetime, 0) {
        LocalResult::Single(datetime) => format!(
            "Next pass at {} for {} seconds!",
            datetime.format("%a %b %d %Y %H:%M:%S GMT%z"),
            pass.duration
        ),
        // risetime 超出 chrono 可表示的範圍
        _ => format!(
            "Next pass at epoch {} for {} seconds!",
            pass.risetime, pass.duration
        ),
    }
}

pub fn print_fly_overs(passes: &[FlyOver]) {
    for pass in passes {
        println!("{}", format_fly_over(pass));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_fly_over() {
        let pass = FlyOver {
            risetime: 134564234,
            duration: 600,
        };

        assert_eq!(
            format_fly_over(&pass),
            "Next pass at Sun Apr 07 1974 10:57:14 GMT+0000 for 600 seconds!"
        );
    }

    #[test]
    fn test_format_fly_over_recent_timestamp() {
        let pass = FlyOver {
            risetime: 1668946991,
            duration: 540,
        };

        let line = format_fly_over(&pass);
        assert!(line.contains("Sun Nov 20 2022 12:23:11 GMT+0000"));
        assert!(line.contains("540 seconds"));
    }

    #[test]
    fn test_format_fly_over_out_of_range_risetime() {
        let pass = FlyOver {
            risetime: i64::MAX,
            duration: 600,
        };

        let line = format_fly_over(&pass);
        assert!(line.contains("epoch"));
        assert!(line.contains("600 seconds"));
    }
}
