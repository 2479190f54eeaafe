//! Built-in ISO 3166-1 alpha-2 table.
//!
//! Each entry is `(code, variants)`; the first variant is the canonical
//! English name, followed by common English alternatives and Spanish names.

pub(crate) const BUILTIN_COUNTRIES: &[(&str, &[&str])] = &[
    ("AD", &["Andorra"]),
    ("AE", &["United Arab Emirates", "UAE", "Emiratos Árabes Unidos"]),
    ("AF", &["Afghanistan", "Afganistán"]),
    ("AG", &["Antigua and Barbuda", "Antigua y Barbuda"]),
    ("AI", &["Anguilla", "Anguila"]),
    ("AL", &["Albania"]),
    ("AM", &["Armenia"]),
    ("AO", &["Angola"]),
    ("AQ", &["Antarctica", "Antártida"]),
    ("AR", &["Argentina"]),
    ("AS", &["American Samoa", "Samoa Americana"]),
    ("AT", &["Austria"]),
    ("AU", &["Australia"]),
    ("AW", &["Aruba"]),
    ("AX", &["Åland Islands", "Aland Islands", "Islas Åland"]),
    ("AZ", &["Azerbaijan", "Azerbaiyán"]),
    ("BA", &["Bosnia and Herzegovina", "Bosnia", "Bosnia y Herzegovina"]),
    ("BB", &["Barbados"]),
    ("BD", &["Bangladesh", "Bangladés"]),
    ("BE", &["Belgium", "Bélgica"]),
    ("BF", &["Burkina Faso"]),
    ("BG", &["Bulgaria"]),
    ("BH", &["Bahrain", "Baréin"]),
    ("BI", &["Burundi"]),
    ("BJ", &["Benin", "Benín"]),
    ("BL", &["Saint Barthélemy", "Saint Barthelemy", "San Bartolomé"]),
    ("BM", &["Bermuda", "Bermudas"]),
    ("BN", &["Brunei", "Brunei Darussalam", "Brunéi"]),
    ("BO", &["Bolivia", "Plurinational State of Bolivia"]),
    ("BQ", &["Caribbean Netherlands", "Bonaire, Sint Eustatius and Saba", "Caribe Neerlandés"]),
    ("BR", &["Brazil", "Brasil"]),
    ("BS", &["Bahamas", "The Bahamas"]),
    ("BT", &["Bhutan", "Bután"]),
    ("BV", &["Bouvet Island", "Isla Bouvet"]),
    ("BW", &["Botswana", "Botsuana"]),
    ("BY", &["Belarus", "Bielorrusia"]),
    ("BZ", &["Belize", "Belice"]),
    ("CA", &["Canada", "Canadá"]),
    ("CC", &["Cocos (Keeling) Islands", "Cocos Islands", "Islas Cocos"]),
    ("CD", &["Democratic Republic of the Congo", "DR Congo", "DRC", "Congo-Kinshasa", "República Democrática del Congo"]),
    ("CF", &["Central African Republic", "República Centroafricana"]),
    ("CG", &["Republic of the Congo", "Congo", "Congo-Brazzaville", "República del Congo"]),
    ("CH", &["Switzerland", "Suiza"]),
    ("CI", &["Côte d'Ivoire", "Cote d'Ivoire", "Ivory Coast", "Costa de Marfil"]),
    ("CK", &["Cook Islands", "Islas Cook"]),
    ("CL", &["Chile"]),
    ("CM", &["Cameroon", "Camerún"]),
    ("CN", &["China", "People's Republic of China", "PRC", "República Popular China"]),
    ("CO", &["Colombia"]),
    ("CR", &["Costa Rica"]),
    ("CU", &["Cuba"]),
    ("CV", &["Cabo Verde", "Cape Verde"]),
    ("CW", &["Curaçao", "Curacao", "Curazao"]),
    ("CX", &["Christmas Island", "Isla de Navidad"]),
    ("CY", &["Cyprus", "Chipre"]),
    ("CZ", &["Czechia", "Czech Republic", "Chequia", "República Checa"]),
    ("DE", &["Germany", "Deutschland", "Alemania"]),
    ("DJ", &["Djibouti", "Yibuti"]),
    ("DK", &["Denmark", "Dinamarca"]),
    ("DM", &["Dominica"]),
    ("DO", &["Dominican Republic", "República Dominicana"]),
    ("DZ", &["Algeria", "Argelia"]),
    ("EC", &["Ecuador"]),
    ("EE", &["Estonia"]),
    ("EG", &["Egypt", "Egipto"]),
    ("EH", &["Western Sahara", "Sahara Occidental"]),
    ("ER", &["Eritrea"]),
    ("ES", &["Spain", "España", "Espana"]),
    ("ET", &["Ethiopia", "Etiopía"]),
    ("FI", &["Finland", "Finlandia"]),
    ("FJ", &["Fiji", "Fiyi"]),
    ("FK", &["Falkland Islands", "Islas Malvinas", "Malvinas"]),
    ("FM", &["Micronesia", "Federated States of Micronesia"]),
    ("FO", &["Faroe Islands", "Islas Feroe"]),
    ("FR", &["France", "Francia"]),
    ("GA", &["Gabon", "Gabón"]),
    ("GB", &["United Kingdom", "Great Britain", "Britain", "U.K.", "England", "Reino Unido", "Gran Bretaña", "Inglaterra"]),
    ("GD", &["Grenada", "Granada"]),
    ("GE", &["Georgia"]),
    ("GF", &["French Guiana", "Guayana Francesa"]),
    ("GG", &["Guernsey"]),
    ("GH", &["Ghana"]),
    ("GI", &["Gibraltar"]),
    ("GL", &["Greenland", "Groenlandia"]),
    ("GM", &["Gambia", "The Gambia"]),
    ("GN", &["Guinea"]),
    ("GP", &["Guadeloupe", "Guadalupe"]),
    ("GQ", &["Equatorial Guinea", "Guinea Ecuatorial"]),
    ("GR", &["Greece", "Grecia"]),
    ("GS", &["South Georgia and the South Sandwich Islands", "Islas Georgias del Sur y Sandwich del Sur"]),
    ("GT", &["Guatemala"]),
    ("GU", &["Guam"]),
    ("GW", &["Guinea-Bissau", "Guinea Bissau"]),
    ("GY", &["Guyana"]),
    ("HK", &["Hong Kong"]),
    ("HM", &["Heard Island and McDonald Islands", "Islas Heard y McDonald"]),
    ("HN", &["Honduras"]),
    ("HR", &["Croatia", "Croacia"]),
    ("HT", &["Haiti", "Haití"]),
    ("HU", &["Hungary", "Hungría"]),
    ("ID", &["Indonesia"]),
    ("IE", &["Ireland", "Irlanda"]),
    ("IL", &["Israel"]),
    ("IM", &["Isle of Man", "Isla de Man"]),
    ("IN", &["India"]),
    ("IO", &["British Indian Ocean Territory", "Territorio Británico del Océano Índico"]),
    ("IQ", &["Iraq", "Irak"]),
    ("IR", &["Iran", "Islamic Republic of Iran", "Irán"]),
    ("IS", &["Iceland", "Islandia"]),
    ("IT", &["Italy", "Italia"]),
    ("JE", &["Jersey"]),
    ("JM", &["Jamaica"]),
    ("JO", &["Jordan", "Jordania"]),
    ("JP", &["Japan", "Japón"]),
    ("KE", &["Kenya", "Kenia"]),
    ("KG", &["Kyrgyzstan", "Kirguistán"]),
    ("KH", &["Cambodia", "Camboya"]),
    ("KI", &["Kiribati"]),
    ("KM", &["Comoros", "Comoras"]),
    ("KN", &["Saint Kitts and Nevis", "San Cristóbal y Nieves"]),
    ("KP", &["North Korea", "Korea, Democratic People's Republic of", "DPRK", "Corea del Norte"]),
    ("KR", &["South Korea", "Korea, Republic of", "Republic of Korea", "Corea del Sur"]),
    ("KW", &["Kuwait"]),
    ("KY", &["Cayman Islands", "Islas Caimán"]),
    ("KZ", &["Kazakhstan", "Kazajistán"]),
    ("LA", &["Laos", "Lao People's Democratic Republic"]),
    ("LB", &["Lebanon", "Líbano"]),
    ("LC", &["Saint Lucia", "Santa Lucía"]),
    ("LI", &["Liechtenstein"]),
    ("LK", &["Sri Lanka"]),
    ("LR", &["Liberia"]),
    ("LS", &["Lesotho", "Lesoto"]),
    ("LT", &["Lithuania", "Lituania"]),
    ("LU", &["Luxembourg", "Luxemburgo"]),
    ("LV", &["Latvia", "Letonia"]),
    ("LY", &["Libya", "Libia"]),
    ("MA", &["Morocco", "Marruecos"]),
    ("MC", &["Monaco", "Mónaco"]),
    ("MD", &["Moldova", "Republic of Moldova", "Moldavia"]),
    ("ME", &["Montenegro"]),
    ("MF", &["Saint Martin", "Saint Martin (French part)", "San Martín"]),
    ("MG", &["Madagascar"]),
    ("MH", &["Marshall Islands", "Islas Marshall"]),
    ("MK", &["North Macedonia", "Macedonia", "Macedonia del Norte"]),
    ("ML", &["Mali", "Malí"]),
    ("MM", &["Myanmar", "Burma", "Birmania"]),
    ("MN", &["Mongolia"]),
    ("MO", &["Macao", "Macau"]),
    ("MP", &["Northern Mariana Islands", "Islas Marianas del Norte"]),
    ("MQ", &["Martinique", "Martinica"]),
    ("MR", &["Mauritania"]),
    ("MS", &["Montserrat"]),
    ("MT", &["Malta"]),
    ("MU", &["Mauritius", "Mauricio"]),
    ("MV", &["Maldives", "Maldivas"]),
    ("MW", &["Malawi", "Malaui"]),
    ("MX", &["Mexico", "México", "Estados Unidos Mexicanos"]),
    ("MY", &["Malaysia", "Malasia"]),
    ("MZ", &["Mozambique"]),
    ("NA", &["Namibia"]),
    ("NC", &["New Caledonia", "Nueva Caledonia"]),
    ("NE", &["Niger", "Níger"]),
    ("NF", &["Norfolk Island", "Isla Norfolk"]),
    ("NG", &["Nigeria"]),
    ("NI", &["Nicaragua"]),
    ("NL", &["Netherlands", "The Netherlands", "Holland", "Países Bajos", "Holanda"]),
    ("NO", &["Norway", "Noruega"]),
    ("NP", &["Nepal"]),
    ("NR", &["Nauru"]),
    ("NU", &["Niue"]),
    ("NZ", &["New Zealand", "Nueva Zelanda"]),
    ("OM", &["Oman", "Omán"]),
    ("PA", &["Panama", "Panamá"]),
    ("PE", &["Peru", "Perú"]),
    ("PF", &["French Polynesia", "Polinesia Francesa"]),
    ("PG", &["Papua New Guinea", "Papúa Nueva Guinea"]),
    ("PH", &["Philippines", "Filipinas"]),
    ("PK", &["Pakistan", "Pakistán"]),
    ("PL", &["Poland", "Polonia"]),
    ("PM", &["Saint Pierre and Miquelon", "San Pedro y Miquelón"]),
    ("PN", &["Pitcairn Islands", "Pitcairn", "Islas Pitcairn"]),
    ("PR", &["Puerto Rico"]),
    ("PS", &["Palestine", "State of Palestine", "Palestina"]),
    ("PT", &["Portugal"]),
    ("PW", &["Palau", "Palaos"]),
    ("PY", &["Paraguay"]),
    ("QA", &["Qatar", "Catar"]),
    ("RE", &["Réunion", "Reunion", "Reunión"]),
    ("RO", &["Romania", "Rumania", "Rumanía"]),
    ("RS", &["Serbia"]),
    ("RU", &["Russia", "Russian Federation", "Rusia"]),
    ("RW", &["Rwanda", "Ruanda"]),
    ("SA", &["Saudi Arabia", "Arabia Saudita", "Arabia Saudí"]),
    ("SB", &["Solomon Islands", "Islas Salomón"]),
    ("SC", &["Seychelles"]),
    ("SD", &["Sudan", "Sudán"]),
    ("SE", &["Sweden", "Suecia"]),
    ("SG", &["Singapore", "Singapur"]),
    ("SH", &["Saint Helena", "Santa Elena"]),
    ("SI", &["Slovenia", "Eslovenia"]),
    ("SJ", &["Svalbard and Jan Mayen", "Svalbard y Jan Mayen"]),
    ("SK", &["Slovakia", "Eslovaquia"]),
    ("SL", &["Sierra Leone", "Sierra Leona"]),
    ("SM", &["San Marino"]),
    ("SN", &["Senegal"]),
    ("SO", &["Somalia"]),
    ("SR", &["Suriname", "Surinam"]),
    ("SS", &["South Sudan", "Sudán del Sur"]),
    ("ST", &["Sao Tome and Principe", "São Tomé and Príncipe", "Santo Tomé y Príncipe"]),
    ("SV", &["El Salvador"]),
    ("SX", &["Sint Maarten", "Sint Maarten (Dutch part)"]),
    ("SY", &["Syria", "Syrian Arab Republic", "Siria"]),
    ("SZ", &["Eswatini", "Swaziland", "Esuatini", "Suazilandia"]),
    ("TC", &["Turks and Caicos Islands", "Islas Turcas y Caicos"]),
    ("TD", &["Chad"]),
    ("TF", &["French Southern Territories", "Territorios Australes Franceses"]),
    ("TG", &["Togo"]),
    ("TH", &["Thailand", "Tailandia"]),
    ("TJ", &["Tajikistan", "Tayikistán"]),
    ("TK", &["Tokelau"]),
    ("TL", &["Timor-Leste", "East Timor", "Timor Oriental"]),
    ("TM", &["Turkmenistan", "Turkmenistán"]),
    ("TN", &["Tunisia", "Túnez"]),
    ("TO", &["Tonga"]),
    ("TR", &["Turkey", "Türkiye", "Turkiye", "Turquía"]),
    ("TT", &["Trinidad and Tobago", "Trinidad y Tobago"]),
    ("TV", &["Tuvalu"]),
    ("TW", &["Taiwan", "Chinese Taipei", "Taiwán"]),
    ("TZ", &["Tanzania", "United Republic of Tanzania"]),
    ("UA", &["Ukraine", "Ucrania"]),
    ("UG", &["Uganda"]),
    ("UM", &["United States Minor Outlying Islands", "Islas Ultramarinas Menores de los Estados Unidos"]),
    ("US", &["United States", "United States of America", "USA", "U.S.", "U.S.A.", "America", "Estados Unidos", "Estados Unidos de América", "EEUU", "EE.UU."]),
    ("UY", &["Uruguay"]),
    ("UZ", &["Uzbekistan", "Uzbekistán"]),
    ("VA", &["Vatican City", "Holy See", "Ciudad del Vaticano", "Santa Sede"]),
    ("VC", &["Saint Vincent and the Grenadines", "San Vicente y las Granadinas"]),
    ("VE", &["Venezuela"]),
    ("VG", &["British Virgin Islands", "Islas Vírgenes Británicas"]),
    ("VI", &["U.S. Virgin Islands", "US Virgin Islands", "Islas Vírgenes de los Estados Unidos"]),
    ("VN", &["Vietnam", "Viet Nam"]),
    ("VU", &["Vanuatu"]),
    ("WF", &["Wallis and Futuna", "Wallis y Futuna"]),
    ("WS", &["Samoa"]),
    ("YE", &["Yemen"]),
    ("YT", &["Mayotte"]),
    ("ZA", &["South Africa", "Sudáfrica"]),
    ("ZM", &["Zambia"]),
    ("ZW", &["Zimbabwe", "Zimbabue"]),
];
