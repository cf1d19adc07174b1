// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use cliclack::{confirm, input, password};

pub fn prompt_email() -> Result<String, Box<dyn Error>> {
    let email: String = input("E-mail")
        .placeholder("you@example.com")
        .validate(|s: &String| {
            if s.trim().is_empty() {
                Err("Please enter your e-mail")
            } else {
                Ok(())
            }
        })
        .interact()?;
    Ok(email)
}

pub fn prompt_password() -> Result<String, Box<dyn Error>> {
    let secret = password("Password").mask('▪').interact()?;
    Ok(secret)
}

/// Asks a yes/no question, defaulting to no.
pub fn prompt_confirm(question: &str) -> Result<bool, Box<dyn Error>> {
    Ok(confirm(question).initial_value(false).interact()?)
}
