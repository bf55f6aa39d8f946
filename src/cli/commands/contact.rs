use super::CommandHandler;
use crate::config::ContactSettings;
use crate::contact::{Acknowledgment, ContactField, ContactSubmitter};
use crate::Result;

/// Handler for the `contact` command
pub struct ContactCommand {
    pub settings: ContactSettings,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl CommandHandler for ContactCommand {
    fn execute(&self) -> Result<()> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()?;
        let ack = runtime.block_on(self.send())?;
        println!("{}", ack.message);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "contact"
    }
}

impl ContactCommand {
    /// Create new contact command
    pub fn new(settings: ContactSettings, name: String, email: String, message: String) -> Self {
        Self {
            settings,
            name,
            email,
            message,
        }
    }

    /// Fill the form and run one submission
    pub async fn send(&self) -> Result<Acknowledgment> {
        let mut submitter = ContactSubmitter::new(self.settings.clone());
        submitter.set_field(ContactField::Name, self.name.as_str());
        submitter.set_field(ContactField::Email, self.email.as_str());
        submitter.set_field(ContactField::Message, self.message.as_str());
        submitter.submit().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FolioError;

    #[tokio::test(start_paused = true)]
    async fn test_send_acknowledges() {
        let command = ContactCommand::new(
            ContactSettings::default(),
            "Мария".to_string(),
            "m@example.org".to_string(),
            "Добрый день".to_string(),
        );
        let ack = command.send().await.unwrap();
        assert_eq!(ack.message, ContactSettings::default().acknowledgment);
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_without_message_fails() {
        let command = ContactCommand::new(
            ContactSettings::default(),
            "Мария".to_string(),
            "m@example.org".to_string(),
            String::new(),
        );
        let err = command.send().await.unwrap_err();
        assert!(matches!(err, FolioError::MissingField(ContactField::Message)));
    }
}
