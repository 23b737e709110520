//! Static translations for the sign-in view
//!
//! Keys are the English strings, so English is the identity.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
  #[default]
  En,
  Fr,
}

impl FromStr for Locale {
  type Err = ();

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "en" | "en-us" | "en-gb" => Ok(Locale::En),
      "fr" | "fr-fr" | "fr-tn" => Ok(Locale::Fr),
      _ => Err(()),
    }
  }
}

const FR: &[(&str, &str)] = &[
  ("Sign In", "Connexion"),
  ("Signing in...", "Connexion..."),
  (
    "Welcome back to login. As an admin, you have access to manage our user's information.",
    "Bon retour. En tant qu'administrateur, vous pouvez gérer les informations de nos utilisateurs.",
  ),
  ("Email", "E-mail"),
  ("Password", "Mot de passe"),
  ("Remember me", "Se souvenir de moi"),
  ("Please enter a valid e-mail address", "Veuillez saisir une adresse e-mail valide"),
  ("Please enter your password", "Veuillez saisir votre mot de passe"),
  ("Invalid e-mail or password", "E-mail ou mot de passe incorrect"),
  (
    "No admin account matches this e-mail address",
    "Aucun compte administrateur ne correspond à cette adresse e-mail",
  ),
  (
    "Your account has been blocked, please contact support",
    "Votre compte a été bloqué, veuillez contacter le support",
  ),
  (
    "Please verify your e-mail address before signing in",
    "Veuillez vérifier votre adresse e-mail avant de vous connecter",
  ),
  (
    "reCAPTCHA verification failed, please try again",
    "La vérification reCAPTCHA a échoué, veuillez réessayer",
  ),
  (
    "This account is not allowed to access the admin space",
    "Ce compte n'est pas autorisé à accéder à l'espace administrateur",
  ),
  ("Welcome", "Bienvenue"),
  ("Dashboard", "Tableau de bord"),
  ("Let's set up your workspace", "Configurons votre espace de travail"),
  ("Light mode", "Mode clair"),
  ("Dark mode", "Mode sombre"),
];

pub fn translate(locale: Locale, key: &'static str) -> &'static str {
  match locale {
    Locale::En => key,
    Locale::Fr => FR
      .iter()
      .find(|(k, _)| *k == key)
      .map(|(_, v)| *v)
      .unwrap_or(key),
  }
}
