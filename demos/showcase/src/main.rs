use std::rc::Rc;

use chrono::NaiveDate;
use reform_core::{FieldBinder, FieldValue, Form, FormEvent, FormStore};
use reform_time::{Clock, ConverterConfig, DateConverter, SystemClock};
use reform_widgets::*;

fn signup_form() -> anyhow::Result<Form> {
    Ok(Form::builder()
        .scalar("email", "")
        .scalar("role", FieldValue::Null)
        .scalar("country", "")
        .array("languages", vec!["rs"])
        .boolean("agreedToTerms", false)
        .scalar("startsAt", "2024-06-01T00:00:00Z")
        .build()?)
}

fn render(binder: &FieldBinder<Form>, conv: &Rc<DateConverter>, clock: &Rc<dyn Clock>) -> anyhow::Result<Vec<FieldView>> {
    let countries = [
        SelectOption::new("de", "Germany"),
        SelectOption::new("fr", "France"),
        SelectOption::new("nl", "Netherlands"),
    ];
    let roles = [
        SelectOption::new("admin", "Administrator"),
        SelectOption::new("editor", "Editor"),
    ];
    let languages = [
        SelectOption::new("rs", "Rust"),
        SelectOption::new("go", "Go"),
        SelectOption::new("zig", "Zig"),
    ];

    let mut langs = FormMultiSelect::for_field(binder, "languages", languages)?
        .chrome(FieldChrome::new().label("Languages"));
    langs.set_query("r");

    Ok(vec![
        FormInput::for_field(binder, "email")?
            .chrome(FieldChrome::new().label_from_name().description("We never share it."))
            .input_type("email")
            .placeholder("you@example.com")
            .view(),
        FormSelect::for_field(binder, "role", roles)?
            .chrome(FieldChrome::new().label("Role"))
            .view(),
        langs.view(),
        FormComboBox::for_field(binder, "country", "country", countries)?.view(),
        FormCheckbox::for_field(binder, "agreedToTerms", "I agree to the terms")?.view(),
        FormDate::for_field(binder, "startsAt", conv.clone(), clock.clone())?
            .mode(DateMode::DateTime)
            .chrome(FieldChrome::new().label("Starts at"))
            .view(),
    ])
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let clock: Rc<dyn Clock> = Rc::new(SystemClock);
    let config = ConverterConfig::from_env()?;
    let conv = Rc::new(DateConverter::from_config(&config, clock.as_ref())?);
    log::info!("dates shown in {}", conv.zone());

    let form = signup_form()?;
    form.subscribe(|e| match e {
        FormEvent::ValueChanged { name, value } => log::info!("{name} = {value:?}"),
        FormEvent::ErrorChanged { name, error } => log::info!("{name} error: {error:?}"),
        FormEvent::Reset => log::info!("form reset"),
    });
    let binder = FieldBinder::new(form.clone());

    for view in render(&binder, &conv, &clock)? {
        println!("{view:#?}");
    }

    // a few user gestures
    FormInput::for_field(&binder, "email")?.input("jane@example.com");
    FormSelect::for_field(&binder, "role", [SelectOption::new("editor", "Editor")])?.choose("editor");
    FormMultiSelect::for_field(&binder, "languages", Vec::new())?.toggle("go");
    FormComboBox::for_field(&binder, "country", "country", [SelectOption::new("nl", "Netherlands")])?.choose("nl");
    FormCheckbox::for_field(&binder, "agreedToTerms", "I agree to the terms")?.toggle();

    let mut starts = FormDate::for_field(&binder, "startsAt", conv.clone(), clock.clone())?.mode(DateMode::DateTime);
    starts.set_hour(2);
    starts.set_minute(45);
    starts.set_period(Period::Pm);
    starts.apply_time()?;
    if let Some(date) = NaiveDate::from_ymd_opt(2024, 6, 10) {
        FormDate::for_field(&binder, "startsAt", conv.clone(), clock.clone())?
            .mode(DateMode::DateTime)
            .select_date(date)?;
    }

    let email = form.value("email").unwrap_or_default();
    if !email.as_text().is_some_and(|e| e.ends_with(".org")) {
        form.set_error("email", "Use your .org address");
    }

    for view in render(&binder, &conv, &clock)? {
        println!("{view:#?}");
    }
    println!("dirty: {}, data: {:?}", form.is_dirty(), form.data());

    form.reset();
    println!("after reset, dirty: {}", form.is_dirty());
    Ok(())
}
