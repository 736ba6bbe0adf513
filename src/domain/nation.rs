/// FIFA/IOC 3-letter codes to ISO 3166-1 alpha-2 codes as used by flagcdn.com.
pub const FIFA_TO_ISO2: &[(&str, &str)] = &[
    ("ALB", "al"),
    ("ALG", "dz"),
    ("ANG", "ao"),
    ("ARG", "ar"),
    ("ARM", "am"),
    ("AUT", "at"),
    ("BEL", "be"),
    ("BFA", "bf"),
    ("BIH", "ba"),
    ("BRA", "br"),
    ("CAN", "ca"),
    ("CGO", "cg"),
    ("CHI", "cl"),
    ("CIV", "ci"),
    ("CMR", "cm"),
    ("COD", "cd"),
    ("COL", "co"),
    ("CRO", "hr"),
    ("CRC", "cr"),
    ("CZE", "cz"),
    ("DEN", "dk"),
    ("DOM", "do"),
    ("ECU", "ec"),
    ("EGY", "eg"),
    ("ENG", "gb-eng"),
    ("ESP", "es"),
    ("FRA", "fr"),
    ("FIN", "fi"),
    ("GAB", "ga"),
    ("GAM", "gm"),
    ("GEO", "ge"),
    ("GER", "de"),
    ("GHA", "gh"),
    ("GRE", "gr"),
    ("GNB", "gw"),
    ("GUI", "gn"),
    ("HON", "hn"),
    ("HUN", "hu"),
    ("IRL", "ie"),
    ("IRN", "ir"),
    ("ISL", "is"),
    ("ISR", "il"),
    ("ITA", "it"),
    ("JAM", "jm"),
    ("JPN", "jp"),
    ("KOR", "kr"),
    ("KVX", "xk"),
    ("LUX", "lu"),
    ("LBY", "ly"),
    ("MAD", "mg"),
    ("MAR", "ma"),
    ("MEX", "mx"),
    ("MKD", "mk"),
    ("MLI", "ml"),
    ("MNE", "me"),
    ("MOZ", "mz"),
    ("NED", "nl"),
    ("NGA", "ng"),
    ("NIR", "gb-nir"),
    ("NOR", "no"),
    ("PAN", "pa"),
    ("POL", "pl"),
    ("POR", "pt"),
    ("RUS", "ru"),
    ("SCO", "gb-sct"),
    ("SEN", "sn"),
    ("SRB", "rs"),
    ("SUI", "ch"),
    ("SVK", "sk"),
    ("SVN", "si"),
    ("SWE", "se"),
    ("TUN", "tn"),
    ("TUR", "tr"),
    ("UKR", "ua"),
    ("URU", "uy"),
    ("USA", "us"),
    ("UZB", "uz"),
    ("VEN", "ve"),
    ("ZAM", "zm"),
];

/// ISO alpha-2 codes to lowercase-dash country names, used when renaming
/// downloaded flag files to human-readable names.
pub const ISO2_TO_COUNTRY: &[(&str, &str)] = &[
    ("al", "albania"),
    ("dz", "algeria"),
    ("ao", "angola"),
    ("ar", "argentina"),
    ("am", "armenia"),
    ("at", "austria"),
    ("be", "belgium"),
    ("bf", "burkina-faso"),
    ("ba", "bosnia-herzegovina"),
    ("br", "brazil"),
    ("ca", "canada"),
    ("cg", "republic-of-the-congo"),
    ("cl", "chile"),
    ("ci", "ivory-coast"),
    ("cm", "cameroon"),
    ("cd", "dr-congo"),
    ("co", "colombia"),
    ("hr", "croatia"),
    ("cr", "costa-rica"),
    ("cz", "czech-republic"),
    ("dk", "denmark"),
    ("do", "dominican-republic"),
    ("ec", "ecuador"),
    ("eg", "egypt"),
    ("gb-eng", "england"),
    ("es", "spain"),
    ("fr", "france"),
    ("fi", "finland"),
    ("ga", "gabon"),
    ("gm", "gambia"),
    ("ge", "georgia"),
    ("de", "germany"),
    ("gh", "ghana"),
    ("gr", "greece"),
    ("gw", "guinea-bissau"),
    ("gn", "guinea"),
    ("hn", "honduras"),
    ("hu", "hungary"),
    ("id", "indonesia"),
    ("ie", "ireland"),
    ("ir", "iran"),
    ("is", "iceland"),
    ("il", "israel"),
    ("it", "italy"),
    ("jm", "jamaica"),
    ("jp", "japan"),
    ("kr", "south-korea"),
    ("xk", "kosovo"),
    ("lu", "luxembourg"),
    ("ly", "libya"),
    ("mg", "madagascar"),
    ("ma", "morocco"),
    ("mx", "mexico"),
    ("mk", "north-macedonia"),
    ("ml", "mali"),
    ("me", "montenegro"),
    ("mz", "mozambique"),
    ("nl", "netherlands"),
    ("ng", "nigeria"),
    ("gb-nir", "northern-ireland"),
    ("no", "norway"),
    ("pa", "panama"),
    ("py", "paraguay"),
    ("pe", "peru"),
    ("pl", "poland"),
    ("pt", "portugal"),
    ("ru", "russia"),
    ("gb-sct", "scotland"),
    ("sn", "senegal"),
    ("rs", "serbia"),
    ("ch", "switzerland"),
    ("sk", "slovakia"),
    ("si", "slovenia"),
    ("se", "sweden"),
    ("tn", "tunisia"),
    ("tr", "turkey"),
    ("ua", "ukraine"),
    ("uy", "uruguay"),
    ("us", "united-states"),
    ("uz", "uzbekistan"),
    ("ve", "venezuela"),
    ("zm", "zambia"),
];

pub fn iso2_for_fifa_code(code: &str) -> Option<&'static str> {
    FIFA_TO_ISO2
        .iter()
        .find(|(fifa, _)| *fifa == code)
        .map(|(_, iso2)| *iso2)
}

pub fn country_for_iso2(code: &str) -> Option<&'static str> {
    ISO2_TO_COUNTRY
        .iter()
        .find(|(iso2, _)| *iso2 == code)
        .map(|(_, country)| *country)
}

/// True if `name` is already one of the target country names.
pub fn is_country_name(name: &str) -> bool {
    ISO2_TO_COUNTRY.iter().any(|(_, country)| *country == name)
}

/// Lowercase, spaces to dashes, drop anything that is not alphanumeric,
/// underscore or dash. "Paris S-G" -> "paris-s-g".
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}
