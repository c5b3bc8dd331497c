//! Register command implementation.

use crate::cli::RegisterArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use vouch_domain::AgentRegistration;
use vouch_sdk::RegistryClient;

/// Execute the register command.
pub async fn execute_register(
    args: RegisterArgs,
    client: &RegistryClient,
    formatter: &Formatter,
) -> Result<()> {
    let registration = build_registration(args)?;
    let agent = client.register_agent(&registration).await?;
    println!("{}", formatter.format_registered(&agent)?);
    Ok(())
}

fn build_registration(args: RegisterArgs) -> Result<AgentRegistration> {
    let name = args.name.trim();
    if name.is_empty() {
        return Err(CliError::InvalidInput("Agent name cannot be empty".to_string()));
    }

    Ok(AgentRegistration {
        name: name.to_string(),
        description: args.description,
        contact: args.contact,
        capabilities: args
            .capabilities
            .into_iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_registration() {
        let registration = build_registration(RegisterArgs {
            name: "  Helper ".to_string(),
            description: Some("Pays invoices".to_string()),
            contact: None,
            capabilities: vec!["payments".to_string(), " ".to_string()],
        })
        .unwrap();

        assert_eq!(registration.name, "Helper");
        assert_eq!(registration.capabilities, vec!["payments"]);
    }

    #[test]
    fn test_blank_name_rejected() {
        let result = build_registration(RegisterArgs {
            name: "   ".to_string(),
            description: None,
            contact: None,
            capabilities: vec![],
        });
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
