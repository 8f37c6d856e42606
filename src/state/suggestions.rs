//! Static gift-idea suggestion catalog with local filtering.
//!
//! Pure presentation convenience: nothing here is persisted or sent to the
//! backend. The catalog is filtered by case-insensitive substring match and
//! a "surprise" action picks one entry at random.

#[cfg(test)]
#[path = "suggestions_test.rs"]
mod suggestions_test;

/// Candidate gift ideas offered as quick-fill chips.
pub const CATALOG: &[&str] = &[
    "Abonnement salle de sport (1 mois)",
    "Abonnement streaming (1 mois)",
    "Affiche / poster encadré",
    "Album photo personnalisé",
    "Atelier (cuisine, poterie…)",
    "Bande dessinée",
    "Billets de concert",
    "Billets de cinéma (2 places)",
    "Bon pour un massage",
    "Box découverte (thé, café, snacks…)",
    "Livre",
    "Livre audio (abonnement 1 mois)",
    "Mug personnalisé",
    "Montre",
    "Montre connectée",
    "Dîner au restaurant",
    "Dégustation (fromages / chocolat)",
    "Parfum",
    "Carte cadeau",
    "Casque audio",
    "Bougie parfumée",
    "Diffuseur d’huiles essentielles",
    "Sweat / hoodie",
    "T-shirt / pull",
    "Chaussettes fun / chaudes",
    "Écharpe",
    "Jeu de société",
    "Jeu vidéo (carte cadeau)",
    "Lego",
    "Lampe de chevet",
    "Guirlande lumineuse",
    "Sac / tote bag",
    "Sac banane",
    "Portefeuille",
    "Porte-clés personnalisé",
    "Plante d’intérieur",
    "Kit jardinage / plantes aromatiques",
    "Bouteille isotherme",
    "Gourde filtrante",
    "Tapis de sport",
    "Élastiques de fitness",
    "Tapis de yoga",
    "Serviette microfibre (sport/voyage)",
    "Puzzle",
    "Escape game",
    "Week-end surprise",
    "Carnet + stylos (joli set)",
    "Pochette / organiseur de voyage",
    "Chargeur rapide",
    "Batterie externe",
    "Support téléphone voiture",
    "Enceinte Bluetooth",
    "Clavier / souris",
    "Souris ergonomique",
    "Platine vinyle (ou vinyle préféré)",
    "Plante LEGO / déco",
    "Cours de langue (1 mois)",
    "Cours de danse",
    "Trousse de soins (skincare)",
    "Coffret bain / spa maison",
];

/// Catalog entries matching `query` as a case-insensitive substring.
/// A blank query matches everything.
pub fn filter(query: &str) -> Vec<&'static str> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return CATALOG.to_vec();
    }
    CATALOG
        .iter()
        .copied()
        .filter(|entry| entry.to_lowercase().contains(&needle))
        .collect()
}

/// Pick an entry from `filtered`, falling back to the full catalog when the
/// filter matched nothing. `roll` is a uniform sample in `[0, 1)`.
pub fn pick(filtered: &[&'static str], roll: f64) -> Option<&'static str> {
    let pool: &[&'static str] = if filtered.is_empty() { CATALOG } else { filtered };
    if pool.is_empty() {
        return None;
    }
    let clamped = roll.clamp(0.0, 1.0 - f64::EPSILON);
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let index = ((clamped * pool.len() as f64) as usize).min(pool.len() - 1);
    pool.get(index).copied()
}

/// Uniform sample in `[0, 1)` from the browser RNG.
pub fn random_roll() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
