/// Package names whose catalog product identifier differs from (or needs
/// pinning for) the name a manifest declares. Keys are lowercase.
const PRODUCT_ALIASES: &[(&str, &str)] = &[
    // Node.js ecosystem
    ("node", "nodejs"),
    ("nodejs", "nodejs"),
    ("react", "react"),
    ("react-dom", "react"),
    ("angular", "angular"),
    ("@angular/core", "angular"),
    ("vue", "vue"),
    // Python ecosystem
    ("python", "python"),
    ("django", "django"),
    // Java ecosystem
    ("java", "java"),
    ("spring", "spring"),
    ("spring-boot", "spring-boot"),
    ("spring-boot-starter-parent", "spring-boot"),
    ("spring-boot-dependencies", "spring-boot"),
    ("spring-core", "spring-framework"),
];

/// Maps package names to release-catalog product identifiers
pub struct ProductAliases;

impl ProductAliases {
    /// Resolves the catalog product id for `package_name`
    ///
    /// Lookup is case-insensitive. Names that miss the alias table are
    /// retried with underscores replaced by hyphens; if that also misses,
    /// the lowercased name is used as-is.
    pub fn product_id_for(package_name: &str) -> String {
        let lowered = package_name.trim().to_lowercase();
        if let Some(product) = Self::lookup(&lowered) {
            return product.to_string();
        }

        let hyphenated = lowered.replace('_', "-");
        if let Some(product) = Self::lookup(&hyphenated) {
            return product.to_string();
        }

        lowered
    }

    fn lookup(name: &str) -> Option<&'static str> {
        PRODUCT_ALIASES
            .iter()
            .find(|(alias, _)| *alias == name)
            .map(|(_, product)| *product)
    }
}
