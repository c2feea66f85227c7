mod script;

use std::error::Error;
use std::fs::File;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use morms::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

use script::{SESSION, Step};

// ============================================================================
// Demo Form
// ============================================================================

struct DemoForm {
    form: Form,
    username: Field,
    password: Field,
    ip: Field,
    submit: SubmitButton,
    submitted: Arc<AtomicBool>,
}

impl DemoForm {
    fn new() -> Self {
        let submitted = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&submitted);
        let form = Form::with_config(FormConfig::new("demo")).on_submit(move || {
            flag.store(true, Ordering::SeqCst);
        });

        let username = text_input(&form, "username", "Username")
            .required(None)
            .mount();
        let password = text_input(&form, "password", "Password")
            .required(None)
            .min_length(6, None)
            .max_length(30, None)
            .mount();
        let ip = ip_input(&form, "ip", "IP address").mount();
        let submit = SubmitButton::new(&form);

        Self {
            form,
            username,
            password,
            ip,
            submit,
            submitted,
        }
    }

    fn fields(&self) -> [&Field; 3] {
        [&self.username, &self.password, &self.ip]
    }

    fn field(&self, id: &str) -> Result<&Field, Box<dyn Error>> {
        self.fields()
            .into_iter()
            .find(|field| field.id().as_str() == id)
            .ok_or_else(|| format!("no field with id '{id}'").into())
    }

    fn apply(&self, step: Step) -> Result<(), Box<dyn Error>> {
        match step {
            Step::Type(id, text) => self.field(id)?.change(text),
            Step::Leave(id) => self.field(id)?.blur(),
            Step::Submit => {
                let outcome = self.submit.click();
                log::info!("submit: {:?}", outcome);
            }
        }
        Ok(())
    }

    fn render(&self) {
        for field in self.fields() {
            let view = field.view();
            match view.visible_message() {
                Some(message) => {
                    println!("  {:<12} {:<16} ! {}", field.label(), field.value(), message)
                }
                None => println!("  {:<12} {}", field.label(), field.value()),
            }
        }
        if let Some(message) = self.submit.view().visible_message() {
            println!("  [Submit]  {}", message);
        } else {
            println!("  [Submit]");
        }
    }

    fn render_results(&self) {
        if !self.submitted.load(Ordering::SeqCst) {
            return;
        }
        println!("Results");
        for field in self.fields() {
            println!("  {:<12} {}", field.id(), field.value());
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let demo = DemoForm::new();

    for (i, step) in SESSION.iter().enumerate() {
        println!("{:>2}. {:?}", i + 1, step);
        demo.apply(*step)?;
        demo.render();
    }

    demo.render_results();
    println!("{}", serde_json::to_string_pretty(&demo.form.state())?);
    Ok(())
}

fn main() {
    // Initialize file logging
    if let Ok(log_file) = File::create("morms-demo.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
    }
}
