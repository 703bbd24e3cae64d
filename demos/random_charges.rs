use charge_field::{
    render::{DivergingColormap, ResampleMethod, ScaleStrategy},
    FieldModel, FieldParameters, FieldRenderer, RenderStrategy,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn main() {
    tracing_subscriber::fmt::init();
    std::fs::create_dir_all("data/output").unwrap();

    let params = FieldParameters::default();
    let mut model = FieldModel::new(params);
    let mut rng = StdRng::seed_from_u64(0);

    for _ in 0..12 {
        let x = rng.gen_range(0.0..params.width() as f64);
        let y = rng.gen_range(0.0..params.height() as f64);
        let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        model.add_charge(x, y, sign * rng.gen_range(0.01..0.05));
    }

    let field = model.evaluate_field();

    let strategies = [
        ("extremum", RenderStrategy::default()),
        (
            "percentile",
            RenderStrategy {
                scale: ScaleStrategy::Percentile(95.0),
                colormap: DivergingColormap::BlueWhiteRed,
                resample: ResampleMethod::Bilinear,
                ..Default::default()
            },
        ),
    ];

    for (name, strategy) in strategies {
        let renderer = FieldRenderer::new(strategy).unwrap();
        let image = renderer.render(&field, 500, 500).unwrap();
        let image_buf =
            image::RgbaImage::from_raw(image.width() as u32, image.height() as u32, image.into_bytes())
                .unwrap();
        image_buf
            .save(format!("data/output/random-charges-{name}.png"))
            .unwrap();
    }
}
