mod support;

use geo::{Area, BoundingRect};
use support::approx_eq;
use wavegear::errors::ParameterError;
use wavegear::float_types::{EPSILON, PI};
use wavegear::{GearLayout, GearParameters};

fn reference_layout() -> GearLayout {
    let params = GearParameters::derive(5.0, 12, 60.0).unwrap();
    GearLayout::generate(params, 5.0, 500).unwrap()
}

#[test]
fn separator_band_straddles_the_roller_orbit() {
    let layout = reference_layout();
    let p = layout.params;
    let band = layout.separator;
    assert!(approx_eq(band.width(), 2.2 * p.eccentricity, EPSILON));
    assert!(approx_eq(
        band.middle_radius(),
        p.wave_generator_radius + p.roller_radius,
        EPSILON
    ));
    let [inner, outer] = band.rings();
    assert!(inner.radius < outer.radius);
    assert_eq!(inner.center, outer.center);
    assert!(approx_eq(inner.center.coords.norm(), 0.0, EPSILON));
}

#[test]
fn wave_generator_is_offset_by_the_eccentricity() {
    let layout = reference_layout();
    let wg = layout.wave_generator;
    assert_eq!(wg.center.x, 0.0);
    assert!(approx_eq(wg.center.y, layout.params.eccentricity, EPSILON));
    assert!(approx_eq(
        wg.radius,
        layout.params.wave_generator_radius,
        EPSILON
    ));
}

#[test]
fn shaft_bore_is_passed_through() {
    let layout = reference_layout();
    assert!(approx_eq(layout.shaft_bore.radius, 2.5, EPSILON));
    assert!(approx_eq(layout.shaft_bore.center.coords.norm(), 0.0, EPSILON));

    let params = GearParameters::derive(5.0, 12, 60.0).unwrap();
    assert_eq!(
        GearLayout::generate(params, -1.0, 500),
        Err(ParameterError::NegativeShaftDiameter(-1.0))
    );
}

#[test]
fn ring_polygon_is_a_closed_geo_ring() {
    let layout = reference_layout();
    let ring = layout.ring_polygon();
    let exterior = ring.exterior();
    assert_eq!(exterior.0.len(), 501);
    assert_eq!(exterior.0.first(), exterior.0.last());
}

#[test]
fn ring_area_sits_between_core_and_blank() {
    let layout = reference_layout();
    let area = layout.ring_polygon().unsigned_area();
    let p = layout.params;
    assert!(area > PI * p.wave_generator_radius * p.wave_generator_radius);
    assert!(area < PI * p.outer_radius * p.outer_radius);
}

#[test]
fn figure_bounds_contain_the_ring() {
    let layout = reference_layout();
    let figure = layout.bounding_rect();
    let ring = layout.ring_polygon().bounding_rect().unwrap();
    assert!(ring.min().x >= figure.min().x);
    assert!(ring.min().y >= figure.min().y);
    assert!(ring.max().x <= figure.max().x);
    assert!(ring.max().y <= figure.max().y);
    assert!(approx_eq(figure.width(), 2.0 * layout.params.outer_radius, EPSILON));
}

#[cfg(feature = "svg-io")]
#[test]
fn svg_document_contains_every_entity() {
    let layout = reference_layout();
    let svg = layout.to_svg_string();
    // 12 rollers + 2 separator rings + wave generator + shaft bore
    assert_eq!(svg.matches("<circle").count(), 16);
    assert_eq!(svg.matches("<path").count(), 1);
    // One legend row per labeled part
    assert_eq!(svg.matches("<text").count(), 5);
    assert!(svg.contains("viewBox"));
    assert!(svg.contains("Cycloidal Ring Gear"));
    assert!(svg.contains("Wave Generator"));
}

#[cfg(feature = "dxf-io")]
#[test]
fn dxf_keeps_the_ring_polyline_on_save() {
    // LWPOLYLINE only exists from R14 on; a drawing saved with an older
    // header version drops the ring silently. Check the raw bytes so a
    // version regression cannot hide behind the reload path.
    let layout = reference_layout();
    let bytes = layout.to_dxf().unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.contains("LWPOLYLINE"));
}

#[cfg(feature = "dxf-io")]
#[test]
fn dxf_round_trips_the_entity_census() {
    use dxf::Drawing;
    use dxf::entities::EntityType;
    use std::io::Cursor;
    use wavegear::io::{LAYER_RING, LAYER_ROLLERS};

    let layout = reference_layout();
    let bytes = layout.to_dxf().unwrap();
    let drawing = Drawing::load(&mut Cursor::new(bytes)).unwrap();

    let mut circles = 0;
    let mut rollers = 0;
    let mut polylines = 0;
    for entity in drawing.entities() {
        match &entity.specific {
            EntityType::Circle(_) => {
                circles += 1;
                if entity.common.layer == LAYER_ROLLERS {
                    rollers += 1;
                }
            },
            EntityType::LwPolyline(ring) => {
                polylines += 1;
                // Closed flag replaces the repeated last point.
                assert_eq!(ring.vertices.len(), 500);
                assert!(ring.is_closed());
                assert_eq!(entity.common.layer, LAYER_RING);
            },
            _ => {},
        }
    }
    assert_eq!(circles, 16);
    assert_eq!(rollers, 12);
    assert_eq!(polylines, 1);
}
