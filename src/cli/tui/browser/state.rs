use tui_input::Input;

use crate::contact::ContactField;
use crate::view::ViewController;

/// Which part of the catalog tab receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogFocus {
    #[default]
    List,
    Search,
}

/// State for the catalog tab
#[derive(Debug, Default)]
pub struct CatalogPane {
    pub focus: CatalogFocus,
    pub search_input: Input,
    /// First visible line of the card list
    pub scroll: u16,
}

/// Which control of the contact form is focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(ContactField),
    Submit,
}

impl Default for FormFocus {
    fn default() -> Self {
        FormFocus::Field(ContactField::Name)
    }
}

impl FormFocus {
    const ORDER: [FormFocus; 4] = [
        FormFocus::Field(ContactField::Name),
        FormFocus::Field(ContactField::Email),
        FormFocus::Field(ContactField::Message),
        FormFocus::Submit,
    ];

    fn step(&self, step: isize) -> FormFocus {
        let len = Self::ORDER.len() as isize;
        let current = Self::ORDER.iter().position(|f| f == self).unwrap_or(0) as isize;
        Self::ORDER[(current + step).rem_euclid(len) as usize]
    }

    pub fn next(&self) -> FormFocus {
        self.step(1)
    }

    pub fn prev(&self) -> FormFocus {
        self.step(-1)
    }
}

/// Text inputs backing the contact form
#[derive(Debug, Default)]
pub struct FormInputs {
    pub name: Input,
    pub email: Input,
    pub message: Input,
}

impl FormInputs {
    pub fn get(&self, field: ContactField) -> &Input {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, field: ContactField) -> &mut Input {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn reset(&mut self) {
        self.name.reset();
        self.email.reset();
        self.message.reset();
    }
}

/// State for the about tab
#[derive(Debug, Default)]
pub struct AboutPane {
    pub focus: FormFocus,
    pub inputs: FormInputs,
}

/// Severity of the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// One-line message under the body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusLine {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// Everything the browser renders from
#[derive(Debug)]
pub struct BrowserState {
    pub view: ViewController,
    pub catalog: CatalogPane,
    pub about: AboutPane,
    pub status: Option<StatusLine>,
    /// Animation frame counter
    pub tick: u64,
}

impl BrowserState {
    pub fn new(view: ViewController) -> Self {
        let mut catalog = CatalogPane::default();
        catalog.search_input = Input::new(view.state().search_query.clone());
        Self {
            view,
            catalog,
            about: AboutPane::default(),
            status: None,
            tick: 0,
        }
    }

    /// Push the search input into the view state
    pub fn sync_search(&mut self) {
        self.view.set_search(self.catalog.search_input.value());
        self.catalog.scroll = 0;
    }

    /// Push one form input into the contact form
    pub fn sync_field(&mut self, field: ContactField) {
        let value = self.about.inputs.get(field).value().to_string();
        self.view.contact_mut().set_field(field, value);
    }
}
