// src/rendering/painter.rs

use super::scene::{RenderCylinder, RenderSphere};
use super::sprite_cache::SpriteCache;
use crate::config;
use gtk4::cairo::{self, Context, Format, ImageSurface};
use std::f64::consts::PI;

const SPRITE_SIZE: i32 = 128;

pub fn paint_background(cr: &Context) {
    let (r, g, b) = config::BACKGROUND_COLOR;
    cr.set_source_rgb(r, g, b);
    cr.paint().expect("Failed to paint background");
}

/// Draw one projected frame. Both slices arrive depth sorted far to near;
/// bonds go down first so atoms always cover their own bond ends.
pub fn draw_scene(
    cr: &Context,
    cylinders: &[RenderCylinder],
    spheres: &[RenderSphere],
    sprites: &mut SpriteCache,
) {
    for cylinder in cylinders {
        draw_cylinder_impostor(
            cr,
            cylinder.start,
            cylinder.end,
            cylinder.radius,
            config::BOND_COLOR,
        );
    }

    let sprite_size = SPRITE_SIZE as f64;
    for sphere in spheres {
        let sprite = sprites.get_or_insert(sphere.species, || {
            let (r, g, b) = sphere.species.color();
            create_atom_sprite(r, g, b)
        });

        let scale = (sphere.radius * 2.0) / sprite_size;
        cr.save().expect("Failed to save context state");
        cr.translate(sphere.screen_pos[0], sphere.screen_pos[1]);
        cr.scale(scale, scale);
        cr.set_source_surface(&sprite, -sprite_size / 2.0, -sprite_size / 2.0)
            .expect("Failed to set sprite source");
        cr.paint().expect("Failed to paint atom sprite");
        cr.restore().expect("Failed to restore context state");
    }
}

/// Pre-renders a 128x128 shaded sphere: white highlight offset to the upper
/// left, base color, darkened rim. Scaled down at draw time, so one surface
/// per species covers every atom size.
fn create_atom_sprite(r: f64, g: f64, b: f64) -> ImageSurface {
    let surface = ImageSurface::create(Format::ARgb32, SPRITE_SIZE, SPRITE_SIZE)
        .expect("Failed to create sprite surface");
    let cr = Context::new(&surface).expect("Failed to create sprite context");

    let center = SPRITE_SIZE as f64 / 2.0;
    let radius = SPRITE_SIZE as f64 / 2.0;

    let pat = cairo::RadialGradient::new(
        center - radius * 0.25,
        center - radius * 0.25,
        radius * 0.1,
        center,
        center,
        radius,
    );
    pat.add_color_stop_rgba(0.0, 1.0, 1.0, 1.0, 1.0);
    pat.add_color_stop_rgba(0.15, r, g, b, 1.0);
    pat.add_color_stop_rgba(0.85, r * 0.4, g * 0.4, b * 0.4, 1.0);
    pat.add_color_stop_rgba(1.0, r * 0.1, g * 0.1, b * 0.1, 1.0);

    cr.set_source(&pat).expect("Failed to set sprite gradient");
    cr.arc(center, center, radius, 0.0, 2.0 * PI);
    cr.fill().expect("Failed to fill sprite");

    surface
}

/// Screen-space quad shaded across its width like a lit cylinder.
fn draw_cylinder_impostor(
    cr: &Context,
    p1: [f64; 3],
    p2: [f64; 3],
    radius: f64,
    color: (f64, f64, f64),
) {
    let dx = p2[0] - p1[0];
    let dy = p2[1] - p1[1];
    let len_sq = dx * dx + dy * dy;
    // End-on bonds project to a point; the atom sprite covers them anyway.
    if len_sq < 0.0001 {
        return;
    }

    let nx = -dy / len_sq.sqrt();
    let ny = dx / len_sq.sqrt();

    let c1x = p1[0] + nx * radius;
    let c1y = p1[1] + ny * radius;
    let c2x = p2[0] + nx * radius;
    let c2y = p2[1] + ny * radius;
    let c3x = p2[0] - nx * radius;
    let c3y = p2[1] - ny * radius;
    let c4x = p1[0] - nx * radius;
    let c4y = p1[1] - ny * radius;

    let gradient = cairo::LinearGradient::new(c1x, c1y, c4x, c4y);
    let (r, g, b) = color;
    gradient.add_color_stop_rgb(0.0, r * 0.3, g * 0.3, b * 0.3);
    gradient.add_color_stop_rgb(0.35, r, g, b);
    gradient.add_color_stop_rgb(
        0.5,
        (r + 0.25).min(1.0),
        (g + 0.25).min(1.0),
        (b + 0.25).min(1.0),
    );
    gradient.add_color_stop_rgb(0.65, r, g, b);
    gradient.add_color_stop_rgb(1.0, r * 0.3, g * 0.3, b * 0.3);

    cr.set_source(&gradient).expect("Failed to set bond gradient");
    cr.move_to(c1x, c1y);
    cr.line_to(c2x, c2y);
    cr.line_to(c3x, c3y);
    cr.line_to(c4x, c4y);
    cr.close_path();
    cr.fill().expect("Failed to fill bond quad");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_dimensions() {
        let sprite = create_atom_sprite(0.608, 0.349, 0.714);
        assert_eq!(sprite.width(), SPRITE_SIZE);
        assert_eq!(sprite.height(), SPRITE_SIZE);
    }

    #[test]
    fn test_degenerate_bond_draws_nothing() {
        let surface = ImageSurface::create(Format::ARgb32, 16, 16).unwrap();
        let cr = Context::new(&surface).unwrap();
        // Must return before touching the context; a panic here fails the test.
        draw_cylinder_impostor(&cr, [5.0, 5.0, 0.0], [5.0, 5.0, 1.0], 2.0, (0.5, 0.5, 0.5));
    }
}
