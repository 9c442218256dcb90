use std::collections::HashMap;
use std::sync::LazyLock;

use once_cell::sync::Lazy;
use regex::Regex;
use strsim::damerau_levenshtein;
use unicode_normalization::UnicodeNormalization;

/// Skill alias -> canonical form mapping (O(1) lookup).
///
/// Postings and profiles spell the same skill a dozen ways; both sides of a
/// match must land on the same canonical token or set intersection is useless.
static ALIAS_TO_CANONICAL: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let aliases: &[(&str, &[&str])] = &[
        // Languages
        (
            "javascript",
            &["js", "javascript", "ecmascript", "es6", "es2015"],
        ),
        ("typescript", &["ts", "typescript", "type script"]),
        ("python", &["python", "python3", "python 3", "py"]),
        ("csharp", &["c#", "csharp", "c sharp", ".net c#"]),
        ("cplusplus", &["c++", "cplusplus", "cpp"]),
        ("golang", &["go", "golang", "go lang"]),
        ("rust", &["rust", "rustlang", "rust lang"]),
        ("ruby", &["ruby", "ruby on rails dev"]),
        // Frontend
        ("react", &["react", "reactjs", "react.js", "react js"]),
        ("vue", &["vue", "vuejs", "vue.js", "vue js", "vue3"]),
        ("angular", &["angular", "angularjs", "angular.js"]),
        ("nextjs", &["next.js", "nextjs", "next js"]),
        ("css", &["css", "css3", "cascading style sheets"]),
        ("sass", &["sass", "scss"]),
        ("tailwind", &["tailwind", "tailwindcss", "tailwind css"]),
        // Backend
        ("nodejs", &["node", "node.js", "nodejs", "node js"]),
        ("django", &["django", "django rest framework", "drf"]),
        ("flask", &["flask", "python flask"]),
        ("spring", &["spring", "spring boot", "springboot"]),
        ("rails", &["rails", "ruby on rails", "ror"]),
        ("fastapi", &["fastapi", "fast api"]),
        ("graphql", &["graphql", "graph ql", "gql"]),
        ("rest", &["rest", "rest api", "restful", "restful api"]),
        // Databases
        ("postgresql", &["postgresql", "postgres", "pg", "postgre sql"]),
        ("mysql", &["mysql", "my sql", "mariadb"]),
        ("mongodb", &["mongodb", "mongo", "mongo db"]),
        ("redis", &["redis", "redis cache"]),
        ("elasticsearch", &["elasticsearch", "elastic search"]),
        ("sqlite", &["sqlite", "sqlite3", "sql lite"]),
        // Cloud / infra
        ("aws", &["aws", "amazon web services", "amazon aws"]),
        ("gcp", &["gcp", "google cloud", "google cloud platform"]),
        ("azure", &["azure", "microsoft azure", "ms azure"]),
        ("docker", &["docker", "docker compose", "containers"]),
        (
            "kubernetes",
            &["kubernetes", "k8s", "k8", "kube", "kubernets"],
        ),
        ("terraform", &["terraform", "tf", "iac terraform"]),
        ("cicd", &["ci/cd", "cicd", "ci cd", "continuous integration"]),
        ("linux", &["linux", "gnu/linux", "unix"]),
        // Data / ML
        ("tensorflow", &["tensorflow", "tensor flow"]),
        ("pytorch", &["pytorch", "torch", "py torch"]),
        ("pandas", &["pandas", "python pandas"]),
        ("spark", &["spark", "apache spark", "pyspark"]),
        ("kafka", &["kafka", "apache kafka"]),
        (
            "machinelearning",
            &["machine learning", "ml", "machinelearning"],
        ),
        ("sql", &["sql", "structured query language"]),
    ];

    let mut map = HashMap::new();
    for (canonical, alias_list) in aliases {
        map.insert(*canonical, *canonical);
        for alias in *alias_list {
            map.insert(*alias, *canonical);
        }
    }
    map
});

/// Same mapping keyed by separator-stripped form, to absorb minor spelling
/// variance ("react-js", "node_js") before the fuzzy fallback kicks in.
static COMPACT_ALIAS_TO_CANONICAL: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for (alias, canonical) in ALIAS_TO_CANONICAL.iter() {
        let compact = compact_key(alias);
        if !compact.is_empty() {
            map.insert(compact, *canonical);
        }
    }
    map
});

static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

fn nfkc_lower_trim(input: &str) -> String {
    let lowered = input.nfkc().collect::<String>().trim().to_lowercase();
    RE_WHITESPACE.replace_all(&lowered, " ").into_owned()
}

fn compact_key(input: &str) -> String {
    input
        .nfkc()
        .collect::<String>()
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '.' | '-' | '_' | '/' | ','))
        .collect()
}

fn split_segments(input: &str) -> impl Iterator<Item = String> + '_ {
    input
        .split(|c: char| matches!(c, '/' | ',' | ';' | '|' | '+' | '&'))
        .map(nfkc_lower_trim)
        .filter(|s| !s.is_empty())
}

fn match_canonical_token(token: &str) -> Option<String> {
    if token.is_empty() {
        return None;
    }

    if let Some(canonical) = ALIAS_TO_CANONICAL.get(token) {
        return Some((*canonical).to_string());
    }

    let compact = compact_key(token);
    if let Some(canonical) = COMPACT_ALIAS_TO_CANONICAL.get(&compact) {
        return Some((*canonical).to_string());
    }

    fuzzy_match_canonical(&compact)
}

fn fuzzy_match_canonical(compact: &str) -> Option<String> {
    // Short tokens (go, sql, aws) only match via exact/alias lookups above;
    // edit-distance on them produces far too many false positives.
    if compact.len() < 5 {
        return None;
    }

    let mut best: Option<(&str, usize)> = None;
    for (alias, canonical) in COMPACT_ALIAS_TO_CANONICAL.iter() {
        if alias.len() < 5 || canonical.len() < 5 {
            continue;
        }

        let distance = damerau_levenshtein(compact, alias);
        if distance == 0 {
            return Some((*canonical).to_string());
        }

        let len = compact.len().max(alias.len());
        let acceptable = distance == 1 || (len >= 8 && distance == 2);
        if !acceptable {
            continue;
        }

        // Ties on distance resolve to the lexicographically smaller canonical
        // so results do not depend on map iteration order.
        match best {
            None => best = Some((*canonical, distance)),
            Some((best_canonical, best_dist))
                if distance < best_dist
                    || (distance == best_dist && *canonical < best_canonical) =>
            {
                best = Some((*canonical, distance))
            }
            _ => {}
        }
    }

    best.map(|(canonical, _)| canonical.to_string())
}

/// Canonicalize one skill name: NFKC + lowercase + whitespace collapse, then
/// alias/compact/fuzzy lookup. Unknown skills pass through lower-cased, so
/// normalization is idempotent for any input.
pub fn normalize_skill(skill: &str) -> String {
    let normalized = nfkc_lower_trim(skill);

    if let Some(canonical) = match_canonical_token(&normalized) {
        return canonical;
    }

    for segment in split_segments(skill) {
        if let Some(canonical) = match_canonical_token(&segment) {
            return canonical;
        }
    }

    normalized
}

/// Canonicalize a free-form tag (domain, location): NFKC + lowercase +
/// whitespace collapse, no alias table.
pub fn normalize_tag(tag: &str) -> String {
    nfkc_lower_trim(tag)
}
