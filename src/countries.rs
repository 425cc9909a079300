//! Country name tables.
//!
//! Three kinds of tables are consulted when detecting a country in free
//! text: names localized into the locale's language, each country's native
//! names, and English names. Every entry maps an ISO 3166 code to one or
//! more names; the first name is the one used for display.

/// A table of `(code, names)` pairs.
pub type NameTable = &'static [(&'static str, &'static [&'static str])];

static ENGLISH: NameTable = &[
    ("AR", &["Argentina"]),
    ("AT", &["Austria"]),
    ("AU", &["Australia"]),
    ("BE", &["Belgium"]),
    ("BR", &["Brazil"]),
    ("CA", &["Canada"]),
    ("CH", &["Switzerland"]),
    ("CL", &["Chile"]),
    ("CN", &["China", "People's Republic of China", "PRC"]),
    ("CO", &["Colombia"]),
    ("DE", &["Germany"]),
    ("DK", &["Denmark"]),
    ("EG", &["Egypt"]),
    ("ES", &["Spain"]),
    ("FI", &["Finland"]),
    ("FR", &["France"]),
    ("GB", &["United Kingdom", "Great Britain", "UK"]),
    ("GR", &["Greece"]),
    ("HK", &["Hong Kong"]),
    ("ID", &["Indonesia"]),
    ("IE", &["Ireland"]),
    ("IL", &["Israel"]),
    ("IN", &["India"]),
    ("IT", &["Italy"]),
    ("JP", &["Japan"]),
    ("KE", &["Kenya"]),
    ("KR", &["South Korea", "Republic of Korea", "Korea"]),
    ("MX", &["Mexico"]),
    ("MY", &["Malaysia"]),
    ("NG", &["Nigeria"]),
    ("NL", &["Netherlands", "The Netherlands", "Holland"]),
    ("NO", &["Norway"]),
    ("NZ", &["New Zealand"]),
    ("PE", &["Peru"]),
    ("PH", &["Philippines"]),
    ("PL", &["Poland"]),
    ("PR", &["Puerto Rico"]),
    ("PT", &["Portugal"]),
    ("RU", &["Russia", "Russian Federation"]),
    ("SE", &["Sweden"]),
    ("SG", &["Singapore"]),
    ("TH", &["Thailand"]),
    ("TR", &["Turkey"]),
    ("TW", &["Taiwan", "Republic of China", "R.O.C."]),
    ("UA", &["Ukraine"]),
    ("US", &["United States", "United States of America", "USA", "U.S.A."]),
    ("VN", &["Vietnam"]),
    ("ZA", &["South Africa"]),
];

static NATIVE: NameTable = &[
    ("AR", &["Argentina"]),
    ("AT", &["Österreich"]),
    ("AU", &["Australia"]),
    ("BR", &["Brasil"]),
    ("CA", &["Canada"]),
    ("CN", &["中国", "中华人民共和国"]),
    ("DE", &["Deutschland"]),
    ("ES", &["España"]),
    ("FR", &["France"]),
    ("GB", &["United Kingdom"]),
    ("HK", &["香港", "香港特別行政區", "中國香港特別行政區"]),
    ("IT", &["Italia"]),
    ("JP", &["日本", "日本国"]),
    ("KR", &["대한민국", "한국"]),
    ("MX", &["México"]),
    ("NL", &["Nederland"]),
    ("PR", &["Puerto Rico"]),
    ("PT", &["Portugal"]),
    ("TW", &["台灣", "臺灣", "中華民國"]),
    ("US", &["United States"]),
    ("ZA", &["South Africa"]),
];

static GERMAN: NameTable = &[
    ("AR", &["Argentinien"]),
    ("AT", &["Österreich"]),
    ("AU", &["Australien"]),
    ("BR", &["Brasilien"]),
    ("CA", &["Kanada"]),
    ("CH", &["Schweiz"]),
    ("CN", &["China"]),
    ("DE", &["Deutschland", "BRD"]),
    ("ES", &["Spanien"]),
    ("FR", &["Frankreich"]),
    ("GB", &["Vereinigtes Königreich", "Großbritannien"]),
    ("IT", &["Italien"]),
    ("JP", &["Japan"]),
    ("MX", &["Mexiko"]),
    ("NL", &["Niederlande"]),
    ("RU", &["Russland"]),
    ("US", &["Vereinigte Staaten", "USA"]),
    ("ZA", &["Südafrika"]),
];

static SPANISH: NameTable = &[
    ("AR", &["Argentina"]),
    ("BR", &["Brasil"]),
    ("CA", &["Canadá"]),
    ("CL", &["Chile"]),
    ("CN", &["China"]),
    ("CO", &["Colombia"]),
    ("DE", &["Alemania"]),
    ("ES", &["España"]),
    ("FR", &["Francia"]),
    ("GB", &["Reino Unido"]),
    ("JP", &["Japón"]),
    ("MX", &["México"]),
    ("NL", &["Países Bajos"]),
    ("PE", &["Perú"]),
    ("PR", &["Puerto Rico"]),
    ("US", &["Estados Unidos", "EE. UU.", "EEUU"]),
];

static FRENCH: NameTable = &[
    ("BE", &["Belgique"]),
    ("BR", &["Brésil"]),
    ("CA", &["Canada"]),
    ("CH", &["Suisse"]),
    ("CN", &["Chine"]),
    ("DE", &["Allemagne"]),
    ("ES", &["Espagne"]),
    ("FR", &["France"]),
    ("GB", &["Royaume-Uni"]),
    ("JP", &["Japon"]),
    ("MX", &["Mexique"]),
    ("NL", &["Pays-Bas"]),
    ("US", &["États-Unis"]),
];

static PORTUGUESE: NameTable = &[
    ("AR", &["Argentina"]),
    ("BR", &["Brasil"]),
    ("CA", &["Canadá"]),
    ("DE", &["Alemanha"]),
    ("ES", &["Espanha"]),
    ("FR", &["França"]),
    ("JP", &["Japão"]),
    ("MX", &["México"]),
    ("PT", &["Portugal"]),
    ("US", &["Estados Unidos"]),
];

static DUTCH: NameTable = &[
    ("BE", &["België"]),
    ("DE", &["Duitsland"]),
    ("FR", &["Frankrijk"]),
    ("GB", &["Verenigd Koninkrijk"]),
    ("NL", &["Nederland"]),
    ("US", &["Verenigde Staten"]),
];

static JAPANESE: NameTable = &[
    ("CN", &["中国"]),
    ("DE", &["ドイツ"]),
    ("FR", &["フランス"]),
    ("GB", &["イギリス"]),
    ("JP", &["日本", "日本国"]),
    ("KR", &["韓国"]),
    ("TW", &["台湾"]),
    ("US", &["アメリカ合衆国", "アメリカ"]),
];

// Simplified forms only: traditional names live in the native table.
static CHINESE: NameTable = &[
    ("AU", &["澳大利亚"]),
    ("BR", &["巴西"]),
    ("CA", &["加拿大"]),
    ("CN", &["中国", "中华人民共和国"]),
    ("DE", &["德国"]),
    ("FR", &["法国"]),
    ("GB", &["英国"]),
    ("HK", &["中国香港"]),
    ("JP", &["日本"]),
    ("KR", &["韩国"]),
    ("MX", &["墨西哥"]),
    ("RU", &["俄罗斯"]),
    ("TW", &["台湾"]),
    ("US", &["美国"]),
    ("ZA", &["南非"]),
];

/// The table of names localized into `language`, if one exists.
pub fn localized(language: &str) -> Option<NameTable> {
    match language {
        "en" => Some(ENGLISH),
        "de" => Some(GERMAN),
        "es" => Some(SPANISH),
        "fr" => Some(FRENCH),
        "pt" => Some(PORTUGUESE),
        "nl" => Some(DUTCH),
        "ja" => Some(JAPANESE),
        "zh" => Some(CHINESE),
        _ => None,
    }
}

/// Tables to search for a country name, in priority order.
pub fn search_order(language: Option<&str>) -> Vec<NameTable> {
    let mut tables = Vec::with_capacity(3);
    if let Some(table) = language.and_then(localized) {
        tables.push(table);
    }
    tables.push(NATIVE);
    tables.push(ENGLISH);
    tables
}

fn first_name(table: NameTable, code: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(c, _)| *c == code)
        .and_then(|(_, names)| names.first().copied())
}

/// Display name of a country in `language`, falling back to English.
pub fn display_name(code: &str, language: Option<&str>) -> Option<&'static str> {
    language
        .and_then(localized)
        .and_then(|table| first_name(table, code))
        .or_else(|| first_name(ENGLISH, code))
}

/// Whether `code` names a country known to the tables.
pub fn is_known(code: &str) -> bool {
    ENGLISH.iter().any(|(c, _)| *c == code)
}

/// Every known country as `(code, display name)` in `language`, sorted by
/// name.
pub fn all(language: Option<&str>) -> Vec<(&'static str, &'static str)> {
    let mut countries: Vec<_> = ENGLISH
        .iter()
        .filter_map(|(code, _)| display_name(code, language).map(|name| (*code, name)))
        .collect();
    countries.sort_by(|a, b| a.1.cmp(b.1));
    countries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_order() {
        assert_eq!(search_order(Some("de")).len(), 3);
        assert_eq!(search_order(Some("tlh")).len(), 2);
        assert_eq!(search_order(None).len(), 2);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(display_name("DE", Some("de")), Some("Deutschland"));
        assert_eq!(display_name("DE", Some("ja")), Some("ドイツ"));
        assert_eq!(display_name("ZA", Some("nl")), Some("South Africa"));
        assert_eq!(display_name("US", None), Some("United States"));
        assert_eq!(display_name("XY", None), None);
    }

    #[test]
    fn test_all_sorted() {
        let countries = all(Some("en"));
        assert!(countries.windows(2).all(|w| w[0].1 <= w[1].1));
        assert!(countries.contains(&("JP", "Japan")));
        assert!(is_known("MX"));
        assert!(!is_known("XX"));
    }

    #[test]
    fn test_every_localized_code_is_known() {
        for language in ["en", "de", "es", "fr", "pt", "nl", "ja", "zh"] {
            let table = localized(language).unwrap();
            for (code, names) in table {
                assert!(is_known(code), "{language}: {code}");
                assert!(!names.is_empty());
            }
        }
        for (code, _) in NATIVE {
            assert!(is_known(code), "{code}");
        }
    }
}
