//! Drives the picker the way a UI would: open the search overlay, type a
//! query one keystroke at a time, then tap a row.

use flagphone_rs::prelude::*;

fn main() -> Result<()> {
    let repository = CountryRepository::load()?;

    let mut selected: Option<Country> = None;
    {
        let mut picker = Picker::with_repository(repository, PickerConfig::default())?;
        picker.on_select(|c: &Country| selected = Some(c.clone()));

        picker.activate_search();
        let mut typed = String::new();
        for ch in "port".chars() {
            typed.push(ch);
            picker.update_query(&typed)?;
            let model = picker.display_model()?;
            println!(
                "{typed:>5}: {} hits in sections {:?}",
                model.iter().count(),
                model.keys()
            );
        }

        let row = picker.row(0, 0)?;
        println!("tapping {} {}", row.flag.emoji(), row.name);
        picker.select(0, 0)?;

        match picker.select(0, 0) {
            Err(PickerError::Closed) => println!("second tap ignored: picker closed"),
            other => println!("unexpected: {other:?}"),
        }
    }

    if let Some(country) = selected {
        println!("caller received {} ({})", country.name(), country.phone_code());
    }
    Ok(())
}
