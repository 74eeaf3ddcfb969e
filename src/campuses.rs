use crate::catalog::load_catalog;
use crate::config::Config;

pub fn list_campuses(config: &Config) {
    let catalog = load_catalog(config);

    println!("{:<58} {:<28} COURSES", "CAMPUS", "FILE");
    for (campus, (name, count)) in config
        .catalog
        .campuses
        .iter()
        .zip(catalog.campus_counts())
    {
        println!(
            "{:<58} {:<28} {}",
            name,
            campus.file.display().to_string(),
            count
        );
    }
    println!();
    println!("total courses: {}", catalog.len());
}
