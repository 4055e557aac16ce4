//! This demo renders a family of wave gears to SVG for visual inspection

use std::fs;
use wavegear::gear::DEFAULT_PROFILE_SAMPLES;
use wavegear::{GearLayout, GearParameters};

const PATH: &str = "out/svg";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Ensure the folder exists
    fs::create_dir_all(PATH)?;

    let variants = [
        ("wave_gear_12", 5.0, 12, 60.0, 5.0),
        ("wave_gear_8", 6.0, 8, 0.0, 8.0), // target 0: floored to the minimum
        ("wave_gear_20", 3.0, 20, 80.0, 10.0),
    ];

    for (name, roller_diameter, rollers_num, outer_diameter, shaft_diameter) in variants {
        let params = GearParameters::derive(roller_diameter, rollers_num, outer_diameter)?;
        let layout =
            GearLayout::generate(params, shaft_diameter, DEFAULT_PROFILE_SAMPLES)?;
        let file = format!("{PATH}/{name}.svg");
        layout.save_svg(&file)?;
        println!(
            "{file}: outer r = {:.2} mm (floor {:.2} mm), reduction {}:1",
            params.outer_radius,
            params.min_outer_radius,
            params.reduction_ratio()
        );
    }

    Ok(())
}
