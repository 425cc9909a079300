//! Built-in territory rule data.
//!
//! Territories whose postal code precedes the locality on the same line
//! (AR, DE, FR, MX, NL) first look for "locality after postal code", then
//! fall back to any digit-free last line, and only then pull the postal code
//! out. Each extractor is skipped once its field is set, which is what makes
//! the fallbacks work.

use crate::rules::{FieldRule, LayoutRule, LineSelector, TerritoryRule, Variants, DEFAULT_CODE};
use crate::types::Field;

use LineSelector::{First, Last, StartAtFirst, StartAtLast};

const LOCALITY_WITHOUT_DIGITS: &str = r"^[^0-9]+$";

/// Fallback entry for territories without rules of their own.
pub(crate) const DEFAULT: TerritoryRule = TerritoryRule {
    code: DEFAULT_CODE,
    variants: Variants::Single(LayoutRule {
        fields: &[
            FieldRule::regex(Field::PostalCode, StartAtLast, r"[0-9]+$"),
            FieldRule::regex(Field::Locality, Last, r"[\w\.\-']+$"),
        ],
        formats: &[("default", "{streetAddress}\n{locality} {region} {postalCode}\n{country}")],
        join: None,
    }),
    labels: &[],
    regions: &[],
};

const US_STATES: &[(&str, &str)] = &[
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AS", "American Samoa"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("GU", "Guam"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("MP", "Northern Mariana Islands"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("PR", "Puerto Rico"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UM", "U.S. Outlying Islands"),
    ("VI", "U.S. Virgin Islands"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("DC", "Washington DC"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
];

const US: TerritoryRule = TerritoryRule {
    code: "US",
    variants: Variants::Single(LayoutRule {
        fields: &[
            FieldRule::regex(Field::PostalCode, StartAtLast, r"[0-9]{5}(-[0-9]{4})?"),
            FieldRule::regions(Field::Region, Last, US_STATES),
            FieldRule::regex(Field::Locality, Last, r"[\p{L}\p{M}\s\.\-']+$"),
        ],
        formats: &[
            ("default", "{streetAddress}\n{locality} {region} {postalCode}\n{country}"),
            ("nocountry", "{streetAddress}\n{locality} {region} {postalCode}"),
        ],
        join: None,
    }),
    labels: &[],
    regions: US_STATES,
};

const CA_PROVINCES: &[(&str, &str)] = &[
    ("AB", "Alberta"),
    ("BC", "British Columbia"),
    ("MB", "Manitoba"),
    ("NB", "New Brunswick"),
    ("NL", "Newfoundland and Labrador"),
    ("NS", "Nova Scotia"),
    ("NT", "Northwest Territories"),
    ("NU", "Nunavut"),
    ("ON", "Ontario"),
    ("PE", "Prince Edward Island"),
    ("QC", "Quebec"),
    ("SK", "Saskatchewan"),
    ("YT", "Yukon"),
];

const CA_FRENCH_PROVINCES: &[&str] = &[
    "Colombie-Britannique",
    "Nouveau-Brunswick",
    "Terre-Neuve-et-Labrador",
    "Nouvelle-Écosse",
    "Territoires du Nord-Ouest",
    "Île-du-Prince-Édouard",
    "Québec",
];

const CA: TerritoryRule = TerritoryRule {
    code: "CA",
    variants: Variants::Single(LayoutRule {
        fields: &[
            FieldRule::regex(
                Field::PostalCode,
                StartAtLast,
                r"[A-Za-z][0-9][A-Za-z]\s+[0-9][A-Za-z][0-9]",
            ),
            FieldRule::regions(Field::Region, Last, CA_PROVINCES),
            FieldRule::names(Field::Region, Last, CA_FRENCH_PROVINCES),
            FieldRule::regex(Field::Locality, Last, r"[\p{L}\p{M}\.\-']+$"),
        ],
        formats: &[
            ("default", "{streetAddress}\n{locality}, {region} {postalCode}\n{country}"),
            ("nocountry", "{streetAddress}\n{locality}, {region} {postalCode}"),
        ],
        join: None,
    }),
    labels: &[
        (Field::StreetAddress, "Street address"),
        (Field::Region, "Province or territory"),
        (Field::PostalCode, "Postal code"),
    ],
    regions: CA_PROVINCES,
};

const PR_MUNICIPALITIES: &[&str] = &[
    "Adjuntas", "Aguada", "Aguadilla", "Aguas Buenas", "Aibonito", "Añasco", "Arecibo", "Arroyo",
    "Barceloneta", "Barranquitas", "Bayamón", "Cabo Rojo", "Caguas", "Camuy", "Canóvanas",
    "Carolina", "Cataño", "Cayey", "Ceiba", "Ciales", "Cidra", "Coamo", "Comerío", "Corozal",
    "Culebra", "Dorado", "Fajardo", "Florida", "Guánica", "Guayama", "Guayanilla", "Guaynabo",
    "Gurabo", "Hatillo", "Hormigueros", "Humacao", "Isabela", "Jayuya", "Juana Díaz", "Juncos",
    "Lajas", "Lares", "Las Marías", "Las Piedras", "Loíza", "Luquillo", "Manatí", "Maricao",
    "Maunabo", "Mayagüez", "Moca", "Morovis", "Naguabo", "Naranjito", "Orocovis", "Patillas",
    "Peñuelas", "Ponce", "Quebradillas", "Rincón", "Río Grande", "Sabana Grande", "Salinas",
    "San Germán", "San Juan", "San Lorenzo", "San Sebastián", "Santa Isabel", "Toa Alta",
    "Toa Baja", "Trujillo Alto", "Utuado", "Vega Alta", "Vega Baja", "Vieques", "Villalba",
    "Yabucoa", "Yauco",
];

const PR: TerritoryRule = TerritoryRule {
    code: "PR",
    variants: Variants::Single(LayoutRule {
        fields: &[
            FieldRule::regex(Field::PostalCode, StartAtLast, r"[0-9]{5}(?:-[0-9]{4})?"),
            FieldRule::names(Field::Region, Last, &["PR", "Puerto Rico"]),
            FieldRule::names(Field::Locality, Last, PR_MUNICIPALITIES),
        ],
        formats: &[
            ("default", "{streetAddress}\n{locality}, {region} {postalCode}\n{country}"),
            ("nocountry", "{streetAddress}\n{locality}, {region} {postalCode}"),
        ],
        join: None,
    }),
    labels: &[],
    regions: &[],
};

const MX_STATES: &[&str] = &[
    "Aguascalientes", "AGS", "Baja California", "BC", "Baja California Sur", "BCS", "Campeche",
    "CAMP", "Chiapas", "CHIS", "Chihuahua", "CHIH", "Ciudad de México", "CDMX", "Coahuila",
    "COAH", "Colima", "COL", "Distrito Federal", "DF", "D.F.", "Durango", "DGO", "Guanajuato",
    "GTO", "Guerrero", "GRO", "Hidalgo", "HGO", "Jalisco", "JAL", "México", "Estado de México",
    "MEX", "Michoacán", "MICH", "Morelos", "MOR", "Nayarit", "NAY", "Nuevo León", "NL", "N.L.",
    "Oaxaca", "OAX", "Puebla", "PUE", "Querétaro", "QRO", "Quintana Roo", "Q. Roo", "San Luis Potosí",
    "SLP", "Sinaloa", "SIN", "Sonora", "SON", "Tabasco", "TAB", "Tamaulipas", "TAMPS", "Tlaxcala",
    "TLAX", "Veracruz", "VER", "Yucatán", "YUC", "Zacatecas", "ZAC",
];

const MX: TerritoryRule = TerritoryRule {
    code: "MX",
    variants: Variants::Single(LayoutRule {
        fields: &[
            FieldRule::names(Field::Region, Last, MX_STATES),
            FieldRule::regex_group(
                Field::Locality,
                Last,
                r"(?:C\.?\s?P\.?\s*)?[0-9]{5}\s+([^0-9]+)$",
                1,
            ),
            FieldRule::regex(Field::Locality, Last, LOCALITY_WITHOUT_DIGITS),
            FieldRule::regex(Field::PostalCode, StartAtLast, r"(?:C\.?\s?P\.?\s*)?[0-9]{5}"),
        ],
        formats: &[
            ("default", "{streetAddress}\n{postalCode} {locality}, {region}\n{country}"),
            ("nocountry", "{streetAddress}\n{postalCode} {locality}, {region}"),
        ],
        join: None,
    }),
    labels: &[(Field::PostalCode, "Postal Code")],
    regions: &[],
};

const BR_STATES: &[(&str, &str)] = &[
    ("AC", "Acre"),
    ("AL", "Alagoas"),
    ("AP", "Amapá"),
    ("AM", "Amazonas"),
    ("BA", "Bahia"),
    ("CE", "Ceará"),
    ("DF", "Distrito Federal"),
    ("ES", "Espírito Santo"),
    ("GO", "Goiás"),
    ("MA", "Maranhão"),
    ("MT", "Mato Grosso"),
    ("MS", "Mato Grosso do Sul"),
    ("MG", "Minas Gerais"),
    ("PA", "Pará"),
    ("PB", "Paraíba"),
    ("PR", "Paraná"),
    ("PE", "Pernambuco"),
    ("PI", "Piauí"),
    ("RJ", "Rio de Janeiro"),
    ("RN", "Rio Grande do Norte"),
    ("RS", "Rio Grande do Sul"),
    ("RO", "Rondônia"),
    ("RR", "Roraima"),
    ("SC", "Santa Catarina"),
    ("SP", "São Paulo"),
    ("SE", "Sergipe"),
    ("TO", "Tocantins"),
];

const BR_CITIES: &[&str] = &[
    "São Paulo", "Sao Paulo", "Rio de Janeiro", "Brasília", "Brasilia", "Salvador", "Fortaleza",
    "Belo Horizonte", "Manaus", "Curitiba", "Recife", "Porto Alegre", "Belém", "Goiânia", "Guarulhos",
    "Campinas", "São Luís", "Maceió", "Natal", "Teresina", "Florianópolis", "João Pessoa", "Santos",
];

const BR: TerritoryRule = TerritoryRule {
    code: "BR",
    variants: Variants::Single(LayoutRule {
        fields: &[
            FieldRule::regex(Field::PostalCode, StartAtLast, r"[0-9]{5}-?[0-9]{3}"),
            FieldRule::regions(Field::Region, Last, BR_STATES),
            FieldRule::names(Field::Locality, Last, BR_CITIES),
            FieldRule::regex(Field::Locality, Last, r"[^0-9]+$"),
        ],
        formats: &[
            ("default", "{streetAddress}\n{locality}-{region}\n{country}\n{postalCode}"),
            ("nocountry", "{streetAddress}\n{locality}-{region}\n{postalCode}"),
        ],
        join: None,
    }),
    labels: &[(Field::PostalCode, "Postal Code")],
    regions: BR_STATES,
};

const AR: TerritoryRule = TerritoryRule {
    code: "AR",
    variants: Variants::Single(LayoutRule {
        fields: &[
            FieldRule::regex_group(Field::Locality, Last, r"[a-z][0-9]{4}[a-z]{3}\s+([^0-9]+)$", 1),
            FieldRule::regex(Field::Locality, Last, LOCALITY_WITHOUT_DIGITS),
            FieldRule::regex(Field::PostalCode, StartAtLast, r"[a-z][0-9]{4}[a-z]{3}"),
        ],
        formats: &[
            ("default", "{streetAddress}\n{postalCode} {locality}\n{region}\n{country}"),
            ("nocountry", "{streetAddress}\n{postalCode} {locality}\n{region}"),
        ],
        join: None,
    }),
    labels: &[(Field::Region, "Province"), (Field::PostalCode, "Postal Code")],
    regions: &[],
};

const DE: TerritoryRule = TerritoryRule {
    code: "DE",
    variants: Variants::Single(LayoutRule {
        fields: &[
            FieldRule::regex_group(Field::Locality, Last, r"[0-9]{5}\s+([^0-9]+)$", 1),
            FieldRule::regex(Field::Locality, Last, LOCALITY_WITHOUT_DIGITS),
            FieldRule::regex(Field::PostalCode, StartAtLast, r"[0-9]{5}"),
        ],
        formats: &[
            ("default", "{streetAddress}\n{postalCode} {locality}\n{country}"),
            ("nocountry", "{streetAddress}\n{postalCode} {locality}"),
        ],
        join: None,
    }),
    labels: &[(Field::PostalCode, "Postal Code")],
    regions: &[],
};

const FR: TerritoryRule = TerritoryRule {
    code: "FR",
    variants: Variants::Single(LayoutRule {
        fields: &[
            FieldRule::regex_group(Field::Locality, Last, r"[0-9]{5}\s+([^0-9]+)$", 1),
            FieldRule::regex(Field::Locality, Last, LOCALITY_WITHOUT_DIGITS),
            FieldRule::regex(Field::PostalCode, StartAtLast, r"[0-9]{5}"),
        ],
        formats: &[
            ("default", "{streetAddress}\n{postalCode} {locality}\n{country}"),
            ("nocountry", "{streetAddress}\n{postalCode} {locality}"),
        ],
        join: None,
    }),
    labels: &[(Field::PostalCode, "Postal Code")],
    regions: &[],
};

const NL: TerritoryRule = TerritoryRule {
    code: "NL",
    variants: Variants::Single(LayoutRule {
        fields: &[
            FieldRule::regex_group(Field::Locality, Last, r"[0-9]{4}\s?[a-z]{2}\s+([^0-9]+)$", 1),
            FieldRule::regex(Field::Locality, Last, LOCALITY_WITHOUT_DIGITS),
            FieldRule::regex(Field::PostalCode, StartAtLast, r"[0-9]{4}\s?[a-z]{2}"),
        ],
        formats: &[
            ("default", "{streetAddress}\n{postalCode} {locality}\n{country}"),
            ("nocountry", "{streetAddress}\n{postalCode} {locality}"),
        ],
        join: None,
    }),
    labels: &[(Field::PostalCode, "Postal Code")],
    regions: &[],
};

const GB: TerritoryRule = TerritoryRule {
    code: "GB",
    variants: Variants::Single(LayoutRule {
        fields: &[
            FieldRule::regex(
                Field::PostalCode,
                StartAtLast,
                r"([A-Za-z]{1,2}[0-9]{1,2}[ABCDEFGHJKMNPRSTUVWXYabcdefghjkmnprstuvwxy]?\s+[0-9][A-Za-z]{2}|GIR 0AA|SAN TA1)",
            ),
            FieldRule::regex(Field::Locality, Last, LOCALITY_WITHOUT_DIGITS),
        ],
        formats: &[
            ("default", "{streetAddress}\n{locality}\n{postalCode}\n{country}"),
            ("nocountry", "{streetAddress}\n{locality}\n{postalCode}"),
        ],
        join: None,
    }),
    labels: &[
        (Field::StreetAddress, "Street address"),
        (Field::Locality, "Town"),
        (Field::PostalCode, "Post code"),
    ],
    regions: &[],
};

const ZA: TerritoryRule = TerritoryRule {
    code: "ZA",
    variants: Variants::Single(LayoutRule {
        fields: &[
            FieldRule::regex(Field::PostalCode, StartAtLast, r"[0-9]{4}"),
            FieldRule::regex(Field::Locality, Last, LOCALITY_WITHOUT_DIGITS),
        ],
        formats: &[
            ("default", "{streetAddress}\n{locality}\n{postalCode}\n{country}"),
            ("nocountry", "{streetAddress}\n{locality}\n{postalCode}"),
        ],
        join: None,
    }),
    labels: &[(Field::PostalCode, "Postal Code")],
    regions: &[],
};

const AU_STATES: &[(&str, &str)] = &[
    ("ACT", "Australian Capital Territory"),
    ("NSW", "New South Wales"),
    ("NT", "Northern Territory"),
    ("QLD", "Queensland"),
    ("SA", "South Australia"),
    ("TAS", "Tasmania"),
    ("VIC", "Victoria"),
    ("WA", "Western Australia"),
];

const AU: TerritoryRule = TerritoryRule {
    code: "AU",
    variants: Variants::Single(LayoutRule {
        fields: &[
            FieldRule::regex(Field::PostalCode, StartAtLast, r"[0-9]{4}"),
            FieldRule::regions(Field::Region, Last, AU_STATES),
            FieldRule::regex(Field::Locality, Last, LOCALITY_WITHOUT_DIGITS),
        ],
        formats: &[
            ("default", "{streetAddress}\n{locality} {region} {postalCode}\n{country}"),
            ("nocountry", "{streetAddress}\n{locality} {region} {postalCode}"),
        ],
        join: None,
    }),
    labels: &[(Field::Locality, "Suburb"), (Field::PostalCode, "Postcode")],
    regions: AU_STATES,
};

const JP_PREFECTURES_LATIN: &[&str] = &[
    "Aichi", "Akita", "Aomori", "Chiba", "Ehime", "Fukui", "Fukuoka", "Fukushima", "Gifu", "Gunma",
    "Hiroshima", "Hokkaido", "Hokkaidō", "Hyogo", "Hyōgo", "Ibaraki", "Ishikawa", "Iwate", "Kagawa",
    "Kagoshima", "Kanagawa", "Kochi", "Kōchi", "Kumamoto", "Kyoto", "Kyōto", "Mie", "Miyagi",
    "Miyazaki", "Nagano", "Nagasaki", "Nara", "Niigata", "Oita", "Ōita", "Okayama", "Okinawa",
    "Osaka", "Ōsaka", "Saga", "Saitama", "Shiga", "Shimane", "Shizuoka", "Tochigi", "Tokushima",
    "Tokyo", "Tōkyō", "Tottori", "Toyama", "Wakayama", "Yamagata", "Yamaguchi", "Yamanashi",
];

const JP_PREFECTURES: &[&str] = &[
    "北海道", "青森県", "岩手県", "宮城県", "秋田県", "山形県", "福島県", "茨城県", "栃木県",
    "群馬県", "埼玉県", "千葉県", "東京都", "神奈川県", "新潟県", "富山県", "石川県", "福井県",
    "山梨県", "長野県", "岐阜県", "静岡県", "愛知県", "三重県", "滋賀県", "京都府", "大阪府",
    "兵庫県", "奈良県", "和歌山県", "鳥取県", "島根県", "岡山県", "広島県", "山口県", "徳島県",
    "香川県", "愛媛県", "高知県", "福岡県", "佐賀県", "長崎県", "熊本県", "大分県", "宮崎県",
    "鹿児島県", "沖縄県",
];

const JP: TerritoryRule = TerritoryRule {
    code: "JP",
    variants: Variants::Multi {
        latin: LayoutRule {
            fields: &[
                FieldRule::regex(Field::PostalCode, StartAtLast, r"[0-9]{3}-[0-9]{4}"),
                FieldRule::names(Field::Region, Last, JP_PREFECTURES_LATIN),
                FieldRule::regex(
                    Field::Locality,
                    Last,
                    r"[\p{L}\p{M}']+-(?:shi|ku|gun|machi|cho|mura)$",
                ),
                FieldRule::regex(Field::Locality, Last, LOCALITY_WITHOUT_DIGITS),
            ],
            formats: &[
                ("default", "{streetAddress}\n{locality}, {region} {postalCode}\n{country}"),
                ("nocountry", "{streetAddress}\n{locality}, {region} {postalCode}"),
            ],
            join: None,
        },
        asian: LayoutRule {
            fields: &[
                FieldRule::regex(Field::PostalCode, StartAtFirst, r"〒?\s*[0-9]{3}-[0-9]{4}"),
                FieldRule::names(Field::Region, First, JP_PREFECTURES),
                FieldRule::regex(Field::Locality, First, r"^.+?[市区町村]"),
            ],
            formats: &[
                ("default", "{country}\n{postalCode}\n{region}{locality}{streetAddress}"),
                ("nocountry", "{postalCode}\n{region}{locality}{streetAddress}"),
            ],
            join: None,
        },
    },
    labels: &[(Field::Region, "Prefecture"), (Field::PostalCode, "Postal Code")],
    regions: &[],
};

const CN_PROVINCES_LATIN: &[&str] = &[
    "Anhui", "Fujian", "Gansu", "Guangdong", "Guǎngdōng", "Guangxi", "Guizhou", "Hainan", "Hebei",
    "Heilongjiang", "Henan", "Hubei", "Hunan", "Inner Mongolia", "Jiangsu", "Jiangxi", "Jilin",
    "Liaoning", "Ningxia", "Qinghai", "Shaanxi", "Shandong", "Shanxi", "Sichuan", "Tibet",
    "Xinjiang", "Yunnan", "Zhejiang",
];

const CN_PROVINCES: &[&str] = &[
    "北京市", "上海市", "天津市", "重庆市", "安徽省", "安徽", "福建省", "福建", "甘肃省", "甘肃",
    "广东省", "广东", "广西壮族自治区", "广西", "贵州省", "贵州", "海南省", "海南", "河北省", "河北",
    "黑龙江省", "黑龙江", "河南省", "河南", "湖北省", "湖北", "湖南省", "湖南", "内蒙古自治区",
    "内蒙古", "江苏省", "江苏", "江西省", "江西", "吉林省", "吉林", "辽宁省", "辽宁", "宁夏回族自治区",
    "宁夏", "青海省", "青海", "陕西省", "陕西", "山东省", "山东", "山西省", "山西", "四川省", "四川",
    "西藏自治区", "西藏", "新疆维吾尔自治区", "新疆", "云南省", "云南", "浙江省", "浙江",
];

const CN_CITIES: &[&str] = &[
    "北京", "上海", "天津", "重庆", "广州", "深圳", "成都", "武汉", "南京", "杭州", "西安",
];

const CN: TerritoryRule = TerritoryRule {
    code: "CN",
    variants: Variants::Multi {
        latin: LayoutRule {
            fields: &[
                FieldRule::regex(Field::PostalCode, StartAtLast, r"[0-9]{6}"),
                FieldRule::names(Field::Region, Last, CN_PROVINCES_LATIN),
                FieldRule::regex(Field::Locality, Last, r"[\p{L}\p{M}\.\-']+$"),
            ],
            formats: &[
                ("default", "{streetAddress}, {locality}\n{postalCode} {region}\n{country}"),
                ("nocountry", "{streetAddress}, {locality}\n{postalCode} {region}"),
            ],
            join: None,
        },
        asian: LayoutRule {
            fields: &[
                FieldRule::regex(Field::PostalCode, StartAtLast, r"[0-9]{6}"),
                FieldRule::names(Field::Region, First, CN_PROVINCES),
                FieldRule::regex(Field::Locality, First, r"^.+?[市区县]"),
                FieldRule::names(Field::Locality, First, CN_CITIES),
            ],
            formats: &[
                ("default", "{country}\n{region}\n{locality}{postalCode}\n{streetAddress}"),
                ("nocountry", "{region}\n{locality}{postalCode}\n{streetAddress}"),
            ],
            join: None,
        },
    },
    labels: &[(Field::Region, "Province or Region"), (Field::PostalCode, "Postal Code")],
    regions: &[],
};

const HK_DISTRICTS: &[&str] = &[
    "中環", "上環", "灣仔", "銅鑼灣", "北角", "太古城", "鰂魚涌", "尖沙咀", "旺角", "九龍城", "觀塘",
    "沙田", "荃灣", "屯門", "元朗", "大埔", "西貢", "將軍澳", "香港仔", "赤柱", "跑馬地", "堅尼地城",
    "油麻地", "深水埗", "東涌",
];

const HK: TerritoryRule = TerritoryRule {
    code: "HK",
    variants: Variants::Multi {
        latin: LayoutRule {
            fields: &[FieldRule::regex(Field::Locality, Last, r"[\p{L}\p{M}\s'\.\-]+$")],
            formats: &[("default", "{streetAddress}\n{locality}\n{country}")],
            join: None,
        },
        asian: LayoutRule {
            fields: &[FieldRule::names(Field::Locality, First, HK_DISTRICTS)],
            formats: &[("default", "{country}{region}{locality}{streetAddress}")],
            join: None,
        },
    },
    labels: &[(Field::Locality, "District"), (Field::Region, "Region")],
    regions: &[],
};

const TW: TerritoryRule = TerritoryRule {
    code: "TW",
    variants: Variants::Multi {
        latin: LayoutRule {
            fields: &[
                FieldRule::regex(Field::PostalCode, StartAtLast, r"(?:^|\s)[0-9]{3}(?:[0-9]{2})?$"),
                FieldRule::names(Field::Region, Last, &["Taiwan"]),
                FieldRule::regex(Field::Locality, Last, r"[\p{L}\p{M}\s'\.\-]+$"),
            ],
            formats: &[
                ("default", "{streetAddress}\n{locality}, {region}, {postalCode}\n{country}"),
                ("nocountry", "{streetAddress}\n{locality}, {region}, {postalCode}"),
            ],
            join: None,
        },
        asian: LayoutRule {
            fields: &[
                FieldRule::regex(Field::PostalCode, StartAtFirst, r"\s*[0-9]{3}(?:[0-9]{2})?\s*"),
                FieldRule::names(Field::Region, First, &["台灣省", "臺灣省", "福建省"]),
                FieldRule::regex(Field::Locality, First, r"^.+?[市縣]"),
            ],
            formats: &[
                ("default", "{country}\n{region}{locality}{streetAddress}{postalCode}"),
                ("nocountry", "{region}{locality}{streetAddress}{postalCode}"),
            ],
            join: None,
        },
    },
    labels: &[(Field::PostalCode, "Postal Code")],
    regions: &[],
};

/// Every territory with rules of its own.
pub(crate) const ALL: &[TerritoryRule] = &[US, CA, PR, MX, BR, AR, DE, FR, NL, GB, ZA, AU, JP, CN, HK, TW];

/// Generic English labels, used where a territory has no override.
pub(crate) fn generic_label(field: Field) -> &'static str {
    match field {
        Field::StreetAddress => "Street Address",
        Field::Locality => "City",
        Field::Region => "State",
        Field::PostalCode => "Zip Code",
        Field::Country => "Country",
    }
}

// (English label, [(language, translation)])
const LABEL_TRANSLATIONS: &[(&[&str], &[(&str, &str)])] = &[
    (
        &["street address"],
        &[
            ("de", "Straßenadresse"),
            ("es", "Dirección"),
            ("fr", "Adresse"),
            ("nl", "Adres"),
            ("pt", "Endereço"),
            ("ja", "住所"),
            ("zh", "地址"),
            ("ru", "Адрес"),
            ("ko", "주소"),
        ],
    ),
    (
        &["city"],
        &[
            ("de", "Stadt"),
            ("es", "Ciudad"),
            ("fr", "Ville"),
            ("nl", "Plaats"),
            ("pt", "Cidade"),
            ("ja", "市区町村"),
            ("zh", "城市"),
            ("ru", "Город"),
            ("ko", "시"),
        ],
    ),
    (
        &["town", "suburb", "district"],
        &[
            ("de", "Ort"),
            ("es", "Localidad"),
            ("fr", "Localité"),
            ("nl", "Plaats"),
            ("pt", "Localidade"),
            ("ja", "町"),
            ("zh", "镇"),
            ("ru", "Город"),
            ("ko", "읍"),
        ],
    ),
    (
        &["state"],
        &[
            ("de", "Bundesland"),
            ("es", "Estado"),
            ("fr", "État"),
            ("nl", "Staat"),
            ("pt", "Estado"),
            ("ja", "州"),
            ("zh", "州"),
            ("ru", "Штат"),
            ("ko", "주"),
        ],
    ),
    (
        &["province"],
        &[
            ("de", "Provinz"),
            ("es", "Provincia"),
            ("fr", "Province"),
            ("nl", "Provincie"),
            ("pt", "Província"),
            ("ja", "州"),
            ("zh", "省"),
            ("ru", "Провинция"),
            ("ko", "도"),
        ],
    ),
    (
        &["province or territory"],
        &[
            ("de", "Provinz oder Gebiet"),
            ("es", "Provincia o territorio"),
            ("fr", "Province ou territoire"),
            ("nl", "Provincie of territorium"),
            ("pt", "Província ou território"),
            ("ja", "州または準州"),
            ("zh", "省或地区"),
            ("ru", "Провинция или территория"),
            ("ko", "주 또는 준주"),
        ],
    ),
    (
        &["province or region"],
        &[
            ("de", "Provinz oder Region"),
            ("es", "Provincia o región"),
            ("fr", "Province ou région"),
            ("nl", "Provincie of regio"),
            ("pt", "Província ou região"),
            ("ja", "省または地域"),
            ("zh", "省或地区"),
            ("ru", "Провинция или регион"),
            ("ko", "성 또는 지역"),
        ],
    ),
    (
        &["prefecture"],
        &[
            ("de", "Präfektur"),
            ("es", "Prefectura"),
            ("fr", "Préfecture"),
            ("nl", "Prefectuur"),
            ("pt", "Província"),
            ("ja", "都道府県"),
            ("zh", "都道府县"),
            ("ru", "Префектура"),
            ("ko", "도도부현"),
        ],
    ),
    (
        &["region"],
        &[
            ("de", "Region"),
            ("es", "Región"),
            ("fr", "Région"),
            ("nl", "Regio"),
            ("pt", "Região"),
            ("ja", "地域"),
            ("zh", "地区"),
            ("ru", "Регион"),
            ("ko", "지역"),
        ],
    ),
    (
        &["zip code", "postal code", "post code", "postcode"],
        &[
            ("de", "Postleitzahl"),
            ("es", "Código postal"),
            ("fr", "Code postal"),
            ("nl", "Postcode"),
            ("pt", "Código postal"),
            ("ja", "郵便番号"),
            ("zh", "邮政编码"),
            ("ru", "Почтовый индекс"),
            ("ko", "우편번호"),
        ],
    ),
    (
        &["country"],
        &[
            ("de", "Land"),
            ("es", "País"),
            ("fr", "Pays"),
            ("nl", "Land"),
            ("pt", "País"),
            ("ja", "国"),
            ("zh", "国家/地区"),
            ("ru", "Страна"),
            ("ko", "국가"),
        ],
    ),
];

/// Translate an English field label, if a translation exists.
pub(crate) fn translate_label(english: &str, language: &str) -> Option<&'static str> {
    let key = english.to_lowercase();
    LABEL_TRANSLATIONS
        .iter()
        .find(|(keys, _)| keys.contains(&key.as_str()))
        .and_then(|(_, translations)| {
            translations
                .iter()
                .find(|(lang, _)| *lang == language)
                .map(|(_, text)| *text)
        })
}
