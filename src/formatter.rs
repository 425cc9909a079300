//! Address formatting and field metadata.

use crate::address::Address;
use crate::countries;
use crate::rules::{self, Territory};
use crate::template::Template;
use crate::territories;
use crate::types::{AddressFormat, Field, Locale, Style};

/// One selectable value of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Choice {
    /// Region or country code
    pub code: String,
    /// Display name
    pub name: String,
}

/// What values a field accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Constraint {
    /// A regular expression the value should match
    Pattern(String),
    /// A closed list of values, sorted by name
    Choices(Vec<Choice>),
}

/// A field as it appears in an address form.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatComponent {
    /// The field
    pub component: Field,
    /// Label for the field in the requested language
    pub label: String,
    /// Accepted values, if restricted
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub constraint: Option<Constraint>,
}

/// Renders [`Address`] values in the layout of their territory.
///
/// The territory comes from the address's country code, or from the
/// formatter's locale when the address has none. Unknown territories are
/// laid out with the generic default rules.
#[derive(Debug, Clone, Default)]
pub struct AddressFormatter {
    locale: Locale,
    style: Style,
}

impl AddressFormatter {
    /// Create a formatter for the default `en-US` locale and style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter for a locale string such as `"ja-JP"`.
    pub fn for_locale(locale: &str) -> Self {
        Self {
            locale: Locale::new(locale),
            style: Style::Default,
        }
    }

    /// Set the locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Set the style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// The formatter's locale.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// The formatter's style.
    pub fn style(&self) -> &Style {
        &self.style
    }

    fn territory(&self) -> &'static Territory {
        rules::lookup(self.locale.territory().as_deref())
    }

    fn template<'t>(&self, territory: &'t Territory, format: AddressFormat) -> Option<&'t Template> {
        territory.template(format, &self.style).or_else(|| {
            log::warn!("No usable template for {}; using the default rules", territory.code());
            rules::lookup(None).template(AddressFormat::Latin, &Style::Default)
        })
    }

    /// Format an address as display lines separated by `\n`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use locale_address::{Address, AddressFormatter};
    ///
    /// let address = Address::builder()
    ///     .street_address("5150 Spectrum Way")
    ///     .locality("Mississauga")
    ///     .region("Ontario")
    ///     .postal_code("L4W 5G1")
    ///     .country("Canada")
    ///     .country_code("CA")
    ///     .build();
    ///
    /// let formatter = AddressFormatter::for_locale("en-CA");
    /// assert_eq!(
    ///     formatter.format(&address),
    ///     "5150 Spectrum Way\nMississauga, Ontario L4W 5G1\nCanada"
    /// );
    /// ```
    pub fn format(&self, address: &Address) -> String {
        let territory = match address.country_code() {
            Some(code) => rules::lookup(Some(code)),
            None => self.territory(),
        };
        let variant = address.format().unwrap_or_default();
        self.template(territory, variant)
            .map(|template| template.render(|field| address.get(field)))
            .unwrap_or_default()
    }

    /// Fields of the formatter's territory layout, one row per output line.
    pub fn field_order(&self, format: AddressFormat) -> Vec<Vec<Field>> {
        self.template(self.territory(), format)
            .map(Template::fields)
            .unwrap_or_default()
    }

    /// Describe the fields of the formatter's territory layout for building
    /// an address form.
    ///
    /// Labels are given in the language of `label_locale`, or of the
    /// formatter's own locale when `None`. Untranslated labels stay in
    /// English.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use locale_address::{AddressFormatter, Field};
    ///
    /// let info = AddressFormatter::for_locale("en-US").format_info(Some("de"));
    /// assert_eq!(info[1][0].component, Field::Locality);
    /// assert_eq!(info[1][0].label, "Stadt");
    /// ```
    pub fn format_info(&self, label_locale: Option<&str>) -> Vec<Vec<FormatComponent>> {
        let territory = self.territory();
        let variant = if territory.is_multiformat() && self.locale.is_asian() {
            AddressFormat::Asian
        } else {
            AddressFormat::Latin
        };
        let label_locale = label_locale.map_or_else(|| self.locale.clone(), Locale::new);
        let language = label_locale.language();

        self.field_order(variant)
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|field| FormatComponent {
                        component: field,
                        label: label(territory, field, language),
                        constraint: constraint(territory, field, variant, language),
                    })
                    .collect()
            })
            .collect()
    }
}

fn label(territory: &Territory, field: Field, language: Option<&str>) -> String {
    let english = territory
        .labels()
        .iter()
        .find(|(f, _)| *f == field)
        .map_or_else(|| territories::generic_label(field), |(_, label)| *label);
    language
        .filter(|language| *language != "en")
        .and_then(|language| territories::translate_label(english, language))
        .unwrap_or(english)
        .to_string()
}

fn constraint(territory: &Territory, field: Field, format: AddressFormat, language: Option<&str>) -> Option<Constraint> {
    match field {
        Field::PostalCode => territory
            .postal_pattern(format)
            .map(|pattern| Constraint::Pattern(pattern.to_string())),
        Field::Region if !territory.regions().is_empty() => {
            let mut choices: Vec<Choice> = territory
                .regions()
                .iter()
                .map(|(code, name)| Choice {
                    code: code.to_string(),
                    name: name.to_string(),
                })
                .collect();
            choices.sort_by(|a, b| a.name.cmp(&b.name));
            Some(Constraint::Choices(choices))
        }
        Field::Country => Some(Constraint::Choices(
            countries::all(language)
                .into_iter()
                .map(|(code, name)| Choice {
                    code: code.to_string(),
                    name: name.to_string(),
                })
                .collect(),
        )),
        _ => None,
    }
}

/// Convenience for one-off formatting with a locale string.
pub fn format_address(address: &Address, locale: &str) -> String {
    AddressFormatter::for_locale(locale).format(address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::AddressParser;
    use assert_matches::assert_matches;

    fn choice<'a>(component: &'a FormatComponent, code: &str) -> Option<&'a str> {
        match &component.constraint {
            Some(Constraint::Choices(choices)) => choices
                .iter()
                .find(|choice| choice.code == code)
                .map(|choice| choice.name.as_str()),
            _ => None,
        }
    }

    fn shape(info: &[Vec<FormatComponent>]) -> Vec<usize> {
        info.iter().map(Vec::len).collect()
    }

    fn labels(info: &[Vec<FormatComponent>]) -> Vec<Vec<&str>> {
        info.iter()
            .map(|row| row.iter().map(|component| component.label.as_str()).collect())
            .collect()
    }

    #[test]
    fn test_format_us() {
        let address = Address::builder()
            .street_address("1234 Any Street")
            .locality("Anytown")
            .region("CA")
            .postal_code("94085")
            .country("United States of America")
            .country_code("US")
            .build();
        assert_eq!(
            AddressFormatter::new().format(&address),
            "1234 Any Street\nAnytown CA 94085\nUnited States of America"
        );
    }

    #[test]
    fn test_format_unknown_territory_without_country() {
        let address = Address::builder()
            .street_address("123 mcdonald ave, apt 234")
            .locality("Sunnyvale")
            .region("CA")
            .postal_code("94086")
            .build();
        let formatter = AddressFormatter::for_locale("en-QQ").with_style(Style::NoCountry);
        assert_eq!(formatter.format(&address), "123 mcdonald ave, apt 234\nSunnyvale CA 94086");

        let address = Address::builder()
            .street_address("123 mcdonald ave")
            .postal_code("94086")
            .country_code("XY")
            .build();
        assert_eq!(AddressFormatter::new().format(&address), "123 mcdonald ave\n94086");
    }

    #[test]
    fn test_format_uses_address_territory() {
        let address = Address::builder()
            .street_address("5F, 633 King's Road")
            .locality("North Point")
            .country("Hong Kong")
            .country_code("HK")
            .build();
        assert_eq!(
            AddressFormatter::for_locale("en-US").format(&address),
            "5F, 633 King's Road\nNorth Point\nHong Kong"
        );
    }

    #[test]
    fn test_format_postal_code_before_locality() {
        let address = Address::builder()
            .street_address("Vicente Guerrero S/N, Centro")
            .locality("Cabo San Lucas")
            .region("BCS")
            .postal_code("C.P 23450")
            .country("México")
            .country_code("MX")
            .build();
        assert_eq!(
            format_address(&address, "es-MX"),
            "Vicente Guerrero S/N, Centro\nC.P 23450 Cabo San Lucas, BCS\nMéxico"
        );

        let address = Address::builder()
            .street_address("At. Sr. Hiro Gordo-Globo, Sumo Informática S.A., Calle 39 No 1540")
            .locality("San Sebastian")
            .postal_code("B1000TBU")
            .country("ARGENTINA")
            .country_code("AR")
            .build();
        assert_eq!(
            format_address(&address, "es-AR"),
            "At. Sr. Hiro Gordo-Globo, Sumo Informática S.A., Calle 39 No 1540\nB1000TBU San Sebastian\nARGENTINA"
        );
    }

    #[test]
    fn test_format_styles() {
        let address = Address::builder()
            .street_address("5150 Spectrum Way")
            .locality("Mississauga")
            .region("Ontario")
            .postal_code("L4W 5G1")
            .country("Canada")
            .country_code("CA")
            .build();
        let formatter = AddressFormatter::for_locale("en-CA");
        assert_eq!(formatter.format(&address), "5150 Spectrum Way\nMississauga, Ontario L4W 5G1\nCanada");
        assert_eq!(
            formatter.clone().with_style(Style::NoCountry).format(&address),
            "5150 Spectrum Way\nMississauga, Ontario L4W 5G1"
        );
        assert_eq!(
            formatter.with_style(Style::Custom("mailing".into())).format(&address),
            "5150 Spectrum Way\nMississauga, Ontario L4W 5G1\nCanada"
        );
    }

    #[test]
    fn test_format_in_field_separators() {
        let address = Address::builder()
            .street_address("Rua Visconde de Porto Seguro")
            .locality("Sao Paulo")
            .region("SP")
            .postal_code("04642-000")
            .country("BRAZIL")
            .country_code("BR")
            .build();
        assert_eq!(
            format_address(&address, "pt-BR"),
            "Rua Visconde de Porto Seguro\nSao Paulo-SP\nBRAZIL\n04642-000"
        );

        let address = Address::builder()
            .street_address("MRS MARÍA SUÁREZ URB LAS GLADIOLAS 150, CALLE A")
            .locality("SAN JUAN")
            .region("PR")
            .postal_code("00926-3232")
            .country("Puerto Rico")
            .country_code("PR")
            .build();
        assert_eq!(
            format_address(&address, "en-PR"),
            "MRS MARÍA SUÁREZ URB LAS GLADIOLAS 150, CALLE A\nSAN JUAN, PR 00926-3232\nPuerto Rico"
        );
    }

    #[test]
    fn test_format_latin_and_asian_variants() {
        let address = Address::builder()
            .street_address("208 Tianhe Road, Tianhe District")
            .locality("Guǎngzhōu")
            .region("Guǎngdōng")
            .postal_code("510620")
            .country("China")
            .country_code("CN")
            .format(AddressFormat::Latin)
            .build();
        assert_eq!(
            format_address(&address, "en-CN"),
            "208 Tianhe Road, Tianhe District, Guǎngzhōu\n510620 Guǎngdōng\nChina"
        );

        let address = Address::builder()
            .street_address("本町2丁目4-7サニーマンション203")
            .locality("渋谷区")
            .region("東京都")
            .postal_code("〒150-2345")
            .country_code("JP")
            .format(AddressFormat::Asian)
            .build();
        assert_eq!(
            format_address(&address, "ja-JP"),
            "〒150-2345\n東京都渋谷区本町2丁目4-7サニーマンション203"
        );

        let address = Address::builder()
            .street_address("英皇道1111號太古城中心1期19字樓")
            .locality("太古城")
            .country("香港")
            .country_code("HK")
            .format(AddressFormat::Asian)
            .build();
        assert_eq!(format_address(&address, "zh-HK"), "香港太古城英皇道1111號太古城中心1期19字樓");

        let address = Address::builder()
            .street_address("苓雅區四維三路6號18樓A")
            .locality("高雄市")
            .region("台灣省")
            .postal_code("80212")
            .country("中華民國")
            .country_code("TW")
            .format(AddressFormat::Asian)
            .build();
        assert_eq!(
            format_address(&address, "zh-Hant-TW"),
            "中華民國\n台灣省高雄市苓雅區四維三路6號18樓A80212"
        );
    }

    #[test]
    fn test_asian_format_ignored_for_single_layout_territory() {
        let address = Address::builder()
            .street_address("Dienerstrasse 12")
            .locality("München")
            .postal_code("80331")
            .country_code("DE")
            .format(AddressFormat::Asian)
            .build();
        assert_eq!(format_address(&address, "de-DE"), "Dienerstrasse 12\n80331 München");
    }

    #[test]
    fn test_parse_format_parse_is_stable() {
        let cases = [
            ("en-US", "950 W Maude Ave.\nSunnyvale, CA 94085\nUSA"),
            ("en-CA", "5150 Spectrum Way\nMississauga, ON\nL4W 5G1\nCanada"),
            ("en-PR", "MRS MARÍA SUÁREZ URB LAS GLADIOLAS 150\nCALLE A\nSAN JUAN, PR 00926-3232\nPuerto Rico"),
            ("es-MX", "Vicente Guerrero S/N, Centro\nC.P 23450 Cabo San Lucas, BCS\nMéxico"),
            ("pt-BR", "Rua Visconde de Porto Seguro, Sao Paulo - SP,BRAZIL"),
            ("pt-BR", "Rua Afonso Canargo, 805, Santana, Guarapuava - PR, 85070-200"),
            ("es-AR", "Luis Escala Piedras 623\nPiso 2, depto 4\nC1070AAM Capital Federa\nARGENTINA"),
            ("de-DE", "Herrenberger Straße 140, 71034 Böblingen, Deutschland"),
            ("fr-FR", "Technoparc de l'Aubinière\n3, avenie des Améthystes\n44300\nNantes\nFrance"),
            ("nl-NL", "Óók 16, 1187 XR s'Hertogen-bósch, Nederland"),
            ("en-GB", "Belgrave House\n76 Buckingham Palace Road\nLondon\nSW1W 9TQ\nUnited Kingdom"),
            ("en-ZA", "123 Main Street, Pretoria 5678, South Africa"),
            ("en-AU", "Dept of Treasury\nLangton Crs\nParkes\nACT 2600\nAustralia"),
            ("en-JP", "5-2-1 Ginza, Chuo-ku\nTokyo 170-3293\nJapan"),
            ("ja-JP", "〒150-2345 東京都渋谷区本町2丁目4-7サニーマンション203"),
            (
                "en-CN",
                "L30, Unit 3007, Teemtower, Teemmall,\n208 Tianhe Road, Tianhe District,\nGuangzhou, Guangdong 510620\nChina",
            ),
            ("zh-CN", "中国北京市朝阳区建国路112号 中国惠普大厦100022"),
            ("en-HK", "Tower 1, Times Square\n1 Matheson Street\nRoom 1706\nCauseway Bay, Hong Kong"),
            ("zh-Hant-HK", "中國香港特別行政區太古城英皇道1111號太古城中心1期19字樓"),
            ("en-TW", "Level 73, Taipei 101 Tower\n7 Xinyi Road, Sec. 5\nTaipei, 110\nTaiwan"),
            ("zh-Hant-TW", "台灣高雄市苓雅區802四維三路6號18樓A"),
        ];

        let mut covered = std::collections::HashSet::new();
        for (locale, text) in cases {
            let parser = AddressParser::for_locale(locale);
            let formatter = AddressFormatter::for_locale(locale);
            let first = parser.parse(text);
            let formatted = formatter.format(&first);
            let second = parser.parse(&formatted);
            assert_eq!(first, second, "{locale}: {formatted:?}");

            let code = rules::lookup(first.country_code()).code();
            covered.insert((code, first.format().unwrap_or(AddressFormat::Latin)));
        }

        for rule in crate::territories::ALL {
            let territory = rules::lookup(Some(rule.code));
            assert!(covered.contains(&(rule.code, AddressFormat::Latin)), "{}", rule.code);
            if territory.is_multiformat() {
                assert!(covered.contains(&(rule.code, AddressFormat::Asian)), "{} asian", rule.code);
            }
        }
    }

    #[test]
    fn test_round_trip_keeps_hyphenated_region() {
        let parser = AddressParser::for_locale("pt-BR");
        let formatter = AddressFormatter::for_locale("pt-BR");
        let first = parser.parse("Rua Visconde de Porto Seguro, Sao Paulo - SP,BRAZIL");
        let formatted = formatter.format(&first);
        assert_eq!(formatted, "Rua Visconde de Porto Seguro\nSao Paulo-SP\nBRAZIL");

        let second = parser.parse(&formatted);
        assert_eq!(second.locality(), Some("Sao Paulo"));
        assert_eq!(second.region(), Some("SP"));
    }

    #[test]
    fn test_round_trip_keeps_asian_postal_code() {
        let parser = AddressParser::for_locale("zh-CN");
        let formatter = AddressFormatter::for_locale("zh-CN");
        let first = parser.parse("中国北京市朝阳区建国路112号 中国惠普大厦100022");
        let formatted = formatter.format(&first);
        assert_eq!(formatted, "中国\n北京市\n朝阳区100022\n建国路112号 中国惠普大厦");

        let second = parser.parse(&formatted);
        assert_eq!(second.postal_code(), Some("100022"));
        assert_eq!(second.street_address(), Some("建国路112号 中国惠普大厦"));
    }

    #[test]
    fn test_field_order() {
        let formatter = AddressFormatter::for_locale("de-DE");
        assert_eq!(
            formatter.field_order(AddressFormat::Latin),
            vec![
                vec![Field::StreetAddress],
                vec![Field::PostalCode, Field::Locality],
                vec![Field::Country],
            ]
        );

        let formatter = AddressFormatter::for_locale("ja-JP").with_style(Style::NoCountry);
        assert_eq!(
            formatter.field_order(AddressFormat::Asian),
            vec![
                vec![Field::PostalCode],
                vec![Field::Region, Field::Locality, Field::StreetAddress],
            ]
        );
    }

    #[test]
    fn test_format_info_us() {
        let info = AddressFormatter::for_locale("en-US").format_info(None);
        assert_eq!(shape(&info), vec![1, 3, 1]);
        assert_eq!(
            labels(&info),
            vec![vec!["Street Address"], vec!["City", "State", "Zip Code"], vec!["Country"]]
        );
        assert_eq!(info[1][2].component, Field::PostalCode);
        assert_eq!(
            info[1][2].constraint,
            Some(Constraint::Pattern("[0-9]{5}(-[0-9]{4})?".to_string()))
        );

        assert_eq!(choice(&info[1][1], "AZ"), Some("Arizona"));
        assert_eq!(choice(&info[1][1], "NY"), Some("New York"));
        assert_matches!(&info[1][1].constraint, Some(Constraint::Choices(states)) => {
            assert_eq!(states.len(), 57);
            assert_eq!(states[0].name, "Alabama");
            assert_eq!(states[47].name, "U.S. Outlying Islands");
            assert_eq!(states[56].name, "Wyoming");
        });

        assert_eq!(choice(&info[2][0], "JP"), Some("Japan"));
        assert_eq!(choice(&info[2][0], "ZA"), Some("South Africa"));
        assert_eq!(info[0][0].constraint, None);
    }

    #[test]
    fn test_format_info_translated_labels() {
        let info = AddressFormatter::for_locale("en-US").format_info(Some("de"));
        assert_eq!(
            labels(&info),
            vec![
                vec!["Straßenadresse"],
                vec!["Stadt", "Bundesland", "Postleitzahl"],
                vec!["Land"],
            ]
        );

        let info = AddressFormatter::for_locale("en-GB").format_info(Some("ru"));
        assert_eq!(shape(&info), vec![1, 1, 1, 1]);
        assert_eq!(
            labels(&info),
            vec![vec!["Адрес"], vec!["Город"], vec!["Почтовый индекс"], vec!["Страна"]]
        );
    }

    #[test]
    fn test_format_info_de() {
        let info = AddressFormatter::for_locale("de-DE").format_info(None);
        assert_eq!(shape(&info), vec![1, 2, 1]);
        assert_eq!(info[1][0].component, Field::PostalCode);
        assert_eq!(info[1][0].label, "Postleitzahl");
        assert_eq!(info[1][0].constraint, Some(Constraint::Pattern("[0-9]{5}".to_string())));
        assert_eq!(info[1][1].label, "Stadt");
        assert_eq!(choice(&info[2][0], "RU"), Some("Russland"));
        assert_eq!(choice(&info[2][0], "CA"), Some("Kanada"));
        assert_eq!(choice(&info[2][0], "ZA"), Some("Südafrika"));
    }

    #[test]
    fn test_format_info_cn_uses_asian_layout() {
        let info = AddressFormatter::for_locale("zh-Hans-CN").format_info(None);
        assert_eq!(shape(&info), vec![1, 1, 2, 1]);
        assert_eq!(info[0][0].component, Field::Country);
        assert_eq!(info[0][0].label, "国家/地区");
        assert_eq!(choice(&info[0][0], "RU"), Some("俄罗斯"));
        assert_eq!(choice(&info[0][0], "CA"), Some("加拿大"));
        assert_eq!(choice(&info[0][0], "ZA"), Some("南非"));
        assert_eq!(info[1][0].label, "省或地区");
        assert_eq!(info[2][0].label, "城市");
        assert_eq!(info[2][1].label, "邮政编码");
        assert_eq!(info[2][1].constraint, Some(Constraint::Pattern("[0-9]{6}".to_string())));
        assert_eq!(info[3][0].component, Field::StreetAddress);
        assert_eq!(info[3][0].label, "地址");
    }

    #[test]
    fn test_format_info_ca() {
        let info = AddressFormatter::for_locale("en-CA").format_info(None);
        assert_eq!(shape(&info), vec![1, 3, 1]);
        assert_eq!(
            labels(&info),
            vec![
                vec!["Street address"],
                vec!["City", "Province or territory", "Postal code"],
                vec!["Country"],
            ]
        );
        assert_eq!(choice(&info[1][1], "NT"), Some("Northwest Territories"));
        assert_eq!(choice(&info[1][1], "QC"), Some("Quebec"));
        assert_eq!(
            info[1][2].constraint,
            Some(Constraint::Pattern(r"[A-Za-z][0-9][A-Za-z]\s+[0-9][A-Za-z][0-9]".to_string()))
        );

        let info = AddressFormatter::for_locale("en-CA").format_info(Some("de"));
        assert_eq!(
            labels(&info),
            vec![
                vec!["Straßenadresse"],
                vec!["Stadt", "Provinz oder Gebiet", "Postleitzahl"],
                vec!["Land"],
            ]
        );
    }

    #[test]
    fn test_format_info_region_labels() {
        let region_label = |locale: &str, label_locale: Option<&str>| {
            AddressFormatter::for_locale(locale)
                .format_info(label_locale)
                .into_iter()
                .flatten()
                .find(|component| component.component == Field::Region)
                .map(|component| component.label)
        };
        assert_eq!(region_label("ja-JP", Some("en")).as_deref(), Some("Prefecture"));
        assert_eq!(region_label("ja-JP", None).as_deref(), Some("都道府県"));
    }

    #[test]
    fn test_format_info_unknown_territory() {
        let info = AddressFormatter::for_locale("en-XY").format_info(None);
        assert_eq!(shape(&info), vec![1, 3, 1]);
        assert_eq!(info[1][0].label, "City");
        assert_eq!(info[1][2].constraint, Some(Constraint::Pattern("[0-9]+$".to_string())));
        assert_eq!(info[1][1].constraint, None);
    }
}
