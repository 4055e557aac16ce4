//! This demo writes a wave gear as DXF sketch entities, one layer per part

use std::fs;
use wavegear::{GearLayout, GearParameters};

const PATH: &str = "out/dxf";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Ensure the folder exists
    fs::create_dir_all(PATH)?;

    let params = GearParameters::derive(
        5.0,  // roller diameter [mm]
        12,   // number of rollers
        60.0, // target outer diameter [mm]
    )?;
    let layout = GearLayout::generate(
        params, 5.0, // input shaft diameter [mm]
        500, // profile samples
    )?;

    let file = format!("{PATH}/wave_gear.dxf");
    layout.save_dxf(&file)?;
    println!("{file}: {} rollers on layer ROLLERS", layout.rollers.len());

    Ok(())
}
