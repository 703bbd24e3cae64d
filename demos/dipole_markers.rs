use charge_field::{Charge, FieldModel, FieldParameters, FieldRenderer};
use tiny_skia::{FillRule, IntSize, Paint, PathBuilder, Pixmap, Stroke, Transform};

fn main() {
    std::fs::create_dir_all("data/output").unwrap();

    let params = FieldParameters::new(120, 80, FieldParameters::COULOMB_CONSTANT).unwrap();
    let positive = Charge::new(40.0, 40.0, 0.03);
    let negative = Charge::new(80.0, 40.0, positive.q).with_opposite_polarity();
    let model = FieldModel::with_charges(params, vec![positive, negative]);

    let (image_width, image_height) = (600, 400);
    let image = FieldRenderer::default()
        .render(&model.evaluate_field(), image_width, image_height)
        .unwrap();

    let size = IntSize::from_wh(image_width as u32, image_height as u32).unwrap();
    let mut pixmap = Pixmap::from_vec(image.into_bytes(), size).unwrap();

    // grid space to pixel space
    let sx = image_width as f32 / params.width() as f32;
    let sy = image_height as f32 / params.height() as f32;

    let mut fill = Paint::default();
    fill.anti_alias = true;
    let mut outline = Paint::default();
    outline.anti_alias = true;
    outline.set_color_rgba8(0, 0, 0, 255);
    let stroke = Stroke {
        width: 2.0,
        ..Default::default()
    };

    for charge in model.charges() {
        let (x, y) = charge.position();
        let cx = (x as f32 + 0.5) * sx;
        let cy = (y as f32 + 0.5) * sy;
        let path = PathBuilder::from_circle(cx, cy, 8.0).unwrap();

        if charge.q >= 0.0 {
            fill.set_color_rgba8(255, 255, 255, 255);
        } else {
            fill.set_color_rgba8(20, 20, 20, 255);
        }
        pixmap.fill_path(&path, &fill, FillRule::Winding, Transform::identity(), None);
        pixmap.stroke_path(&path, &outline, &stroke, Transform::identity(), None);
    }

    pixmap.save_png("data/output/dipole-markers.png").unwrap();
}
