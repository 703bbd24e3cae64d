use charge_field::{FieldModel, FieldRenderer, RasterImage};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    std::fs::create_dir_all("data/output").unwrap();

    let mut model = FieldModel::default();
    let renderer = FieldRenderer::default();

    let field = model.evaluate_field();
    println!(
        "single charge: field[70][20] = {:?}, field[0][0] = {:?}",
        field.get(70, 20),
        field.get(0, 0)
    );
    save_image(
        &renderer.render(&field, 500, 500).unwrap(),
        "data/output/scenario-single.png",
    );

    model.add_charge(70.0, 30.0, -0.04);
    save_image(
        &renderer.render(&model.evaluate_field(), 500, 500).unwrap(),
        "data/output/scenario-dipole.png",
    );

    model.add_charge(20.0, 70.0, -0.04);
    model.add_charge(70.0, 30.0, 0.04);
    let field = model.evaluate_field();
    println!("after cancelling charges: zero field = {}", field.is_zero());
    save_image(
        &renderer.render(&field, 500, 500).unwrap(),
        "data/output/scenario-cancelled.png",
    );
}

fn save_image(image: &RasterImage, filename: &str) {
    let image_buf = image::RgbaImage::from_raw(
        image.width() as u32,
        image.height() as u32,
        image.as_bytes().to_vec(),
    )
    .unwrap();
    image_buf.save(filename).unwrap();
}
