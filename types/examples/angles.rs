//! Construct a few angles, combine them and show the range check in action.

use equatorial_types::{Angle, Latitude};

fn main() {
    let mut a1 = Angle::new(44.0, 59.0, 60.0);
    let a2 = match Angle::from_strs("44", "59", "60") {
        Ok(angle) => angle,
        Err(err) => {
            eprintln!("Error: {err}");
            return;
        }
    };

    println!("a1 = {a1}");
    println!("a2 = {a2}");

    a1 += a2;

    println!("sin(a1 + a2) = {}", a1.radians().sin());

    if let Err(err) = Latitude::new(200.0, 0.0, 0.0) {
        println!("Error: {err}");
    }
}
