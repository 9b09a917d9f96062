//! Quick walkthrough of the sheet engine's public API

use sheet_core::{CharacterSession, SheetConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== Character Sheet Demo ===\n");

    // 1. Create a session from the standard configuration
    println!("1. Creating session...");
    let mut session = CharacterSession::new(SheetConfig::standard())?;
    println!("   Sheet id: {}", session.id());
    println!(
        "   {} attributes, {} skills, {} classes",
        session.attributes().len(),
        session.skills().len(),
        session.catalog().len()
    );

    // 2. Edit some attributes and skills
    println!("\n2. Editing: +4 Strength, +2 Dexterity, +3 Stealth...");
    for _ in 0..4 {
        session.increase_attribute("Strength")?;
    }
    for _ in 0..2 {
        session.increase_attribute("Dexterity")?;
    }
    for _ in 0..3 {
        session.increase_skill("Stealth")?;
    }

    // 3. Show derived state
    println!("\n3. Attributes:");
    for attribute in session.attributes().iter() {
        println!(
            "   {}: {} (Modifier: {})",
            attribute.name(),
            attribute.value(),
            attribute.modifier()
        );
    }

    println!("\n4. Skill totals:");
    for skill in session.skills().iter() {
        println!(
            "   {}: {} (Total: {})",
            skill.name(),
            skill.base_value(),
            skill.total(session.attributes())
        );
    }

    println!("\n5. Class eligibility:");
    for name in session.catalog().names() {
        let eligible = session.is_eligible(name)?;
        println!("   {name}: {}", if eligible { "qualifies" } else { "-" });
    }

    // 6. Inspect class details via the toggle
    println!("\n6. Barbarian requirements:");
    if let Some(details) = session.toggle_class_details("Barbarian")? {
        for requirement in details.minimums() {
            println!("   {}: {}", requirement.attribute, requirement.minimum);
        }
    }

    // 7. Save if a vault is configured
    println!("\n7. Saving...");
    match vault::Vault::from_env() {
        Ok(vault) => match session.save(&vault).await {
            Ok(()) => println!("   Saved to {}", vault.endpoint()),
            Err(e) => println!("   Save failed (local state intact): {e}"),
        },
        Err(_) => println!("   VAULT_USERNAME not set, skipping save"),
    }

    println!("\n=== Done ===");
    Ok(())
}
