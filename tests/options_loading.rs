use std::error::Error;
use std::io::Write;

use runlineage::config::{self, OptionsFile, validate_options};

type TestResult = Result<(), Box<dyn Error>>;

fn write_options(contents: &str) -> Result<tempfile::NamedTempFile, Box<dyn Error>> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    file.write_all(contents.as_bytes())?;
    Ok(file)
}

#[test]
fn defaults_match_the_dashboard_constants() -> TestResult {
    let options = OptionsFile::default();

    assert_eq!(options.layout.variant, "tree");
    assert_eq!(options.layout.spacing_x, 3.0);
    assert_eq!(options.layout.spacing_y, 1.5);
    assert_eq!(options.layout.separation_y, 1.5);
    assert_eq!(options.layout.pad_x, 0.7);
    assert_eq!(options.layout.pad_y, 0.6);
    assert_eq!(options.layout.label_attempts, 50);
    assert_eq!(options.palette.saturation, 65.0);
    assert_eq!(options.palette.lightness, 50.0);

    validate_options(&options)?;
    Ok(())
}

#[test]
fn partial_toml_overrides_only_what_it_names() -> TestResult {
    let file = write_options(
        r#"
[layout]
variant = "boxes"
spacing_x = 4.0

[palette]
saturation = 80.0
"#,
    )?;

    let options = config::load_and_validate(file.path())?;

    assert_eq!(options.layout.variant, "boxes");
    assert_eq!(options.layout.spacing_x, 4.0);
    // Untouched fields keep their defaults.
    assert_eq!(options.layout.spacing_y, 1.5);
    assert_eq!(options.palette.saturation, 80.0);
    assert_eq!(options.palette.lightness, 50.0);

    Ok(())
}

#[test]
fn empty_file_yields_full_defaults() -> TestResult {
    let file = write_options("")?;
    let options = config::load_and_validate(file.path())?;
    assert_eq!(options.layout.variant, "tree");
    Ok(())
}

#[test]
fn unknown_variant_is_rejected() -> TestResult {
    let file = write_options("[layout]\nvariant = \"circle\"\n")?;
    let err = config::load_and_validate(file.path()).unwrap_err();
    assert!(format!("{err:#}").contains("variant"));
    Ok(())
}

#[test]
fn non_positive_geometry_is_rejected() -> TestResult {
    let file = write_options("[layout]\nspacing_x = 0.0\n")?;
    assert!(config::load_and_validate(file.path()).is_err());

    let file = write_options("[layout]\nseparation_y = -1.5\n")?;
    assert!(config::load_and_validate(file.path()).is_err());

    let file = write_options("[layout]\nlabel_attempts = 0\n")?;
    assert!(config::load_and_validate(file.path()).is_err());

    Ok(())
}

#[test]
fn out_of_range_palette_values_are_rejected() -> TestResult {
    let file = write_options("[palette]\nsaturation = 150.0\n")?;
    assert!(config::load_and_validate(file.path()).is_err());

    let file = write_options("[palette]\nlightness = -5.0\n")?;
    assert!(config::load_and_validate(file.path()).is_err());

    Ok(())
}

#[test]
fn explicit_missing_config_path_is_an_error() -> TestResult {
    assert!(config::load_or_default(Some("/definitely/not/here.toml")).is_err());
    Ok(())
}
