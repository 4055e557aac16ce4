// main.rs
//
// Minimal demo: derive the wave gear the companion scripts historically
// drew (5 mm rollers, 12 of them, 60 mm target OD, 5 mm shaft) and write
// it out through every enabled rendering backend.

use std::fs;
use wavegear::gear::DEFAULT_PROFILE_SAMPLES;
use wavegear::{GearLayout, GearParameters};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let roller_diameter = 5.0; // mm
    let rollers_num = 12;
    let cycloid_outer_diameter = 60.0; // mm (raised if below the feasible minimum)
    let input_shaft_diameter = 5.0; // mm

    let params =
        GearParameters::derive(roller_diameter, rollers_num, cycloid_outer_diameter)?;
    let layout = GearLayout::generate(params, input_shaft_diameter, DEFAULT_PROFILE_SAMPLES)?;

    if params.outer_radius_raised() {
        println!(
            "requested outer diameter was infeasible; raised to {:.2} mm",
            2.0 * params.outer_radius
        );
    }
    println!(
        "wave gear: {} rollers, {} lobes, reduction {}:1, wave generator r = {:.2} mm",
        params.roller_count,
        params.cavity_count,
        params.reduction_ratio(),
        params.wave_generator_radius
    );

    fs::create_dir_all("out")?;

    #[cfg(feature = "svg-io")]
    {
        layout.save_svg("out/wave_gear.svg")?;
        println!("wrote out/wave_gear.svg");
    }

    #[cfg(feature = "dxf-io")]
    {
        layout.save_dxf("out/wave_gear.dxf")?;
        println!("wrote out/wave_gear.dxf");
    }

    #[cfg(not(any(feature = "svg-io", feature = "dxf-io")))]
    let _ = layout;

    Ok(())
}
