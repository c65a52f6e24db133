//! Compiled-in scrape targets.

/// Site base used to absolutize relative hrefs.
pub const BASE_URL: &str = "https://www.transfermarkt.co.uk";

/// Default output filename in the working directory.
pub const DEFAULT_OUTPUT: &str = "players_minutes.csv";

/// Club performance-data pages to visit, in order.
pub const CLUB_URLS: &[&str] = &[
    "https://www.transfermarkt.co.uk/hampton-amp-richmond-borough/leistungsdaten/verein/8820",
    "https://www.transfermarkt.co.uk/fc-farnborough/leistungsdaten/verein/4279",
    "https://www.transfermarkt.co.uk/afc-wimbledon/leistungsdaten/verein/3884",
    "https://www.transfermarkt.co.uk/fc-woking/leistungsdaten/verein/2796",
    "https://www.transfermarkt.co.uk/sutton-united/leistungsdaten/verein/3052",
    "https://www.transfermarkt.co.uk/dorking-wanderers/leistungsdaten/verein/52299",
    "https://www.transfermarkt.co.uk/slough-town/leistungsdaten/verein/11310",
    "https://www.transfermarkt.co.uk/aldershot-town/leistungsdaten/verein/3717",
    "https://www.transfermarkt.co.uk/maidenhead-united/leistungsdaten/verein/7123",
    "https://www.transfermarkt.co.uk/fc-wealdstone/leistungsdaten/verein/4117",
    "https://www.transfermarkt.co.uk/hemel-hempstead-town/leistungsdaten/verein/17980",
    "https://www.transfermarkt.co.uk/st-albans-city/leistungsdaten/verein/3826",
    "https://www.transfermarkt.co.uk/fc-boreham-wood/leistungsdaten/verein/3867",
    "https://www.transfermarkt.co.uk/fc-barnet/leistungsdaten/verein/2804",
    "https://www.transfermarkt.co.uk/oxford-city-fc/leistungsdaten/verein/22563",
    "https://www.transfermarkt.co.uk/fc-bromley/leistungsdaten/verein/8981",
    "https://www.transfermarkt.co.uk/fc-dagenham-amp-redbridge/leistungsdaten/verein/3696",
    "https://www.transfermarkt.co.uk/aveley-fc/leistungsdaten/verein/26658",
    "https://www.transfermarkt.co.uk/tonbridge-angels-fc/leistungsdaten/verein/14672",
    "https://www.transfermarkt.co.uk/welling-united/leistungsdaten/verein/7454",
    "https://www.transfermarkt.co.uk/dartford-fc/leistungsdaten/verein/4074",
    "https://www.transfermarkt.co.uk/ebbsfleet-united/leistungsdaten/verein/2797",
    "https://www.transfermarkt.co.uk/chelmsford-city/leistungsdaten/verein/3698",
    "https://www.transfermarkt.co.uk/maidstone-united/leistungsdaten/verein/7047",
    "https://www.transfermarkt.co.uk/southend-united/leistungsdaten/verein/2793",
    "https://www.transfermarkt.co.uk/eastleigh-fc/leistungsdaten/verein/10391",
    "https://www.transfermarkt.co.uk/worthing-fc/leistungsdaten/verein/8123",
    "https://www.transfermarkt.co.uk/braintree-town/leistungsdaten/verein/6340",
    "https://www.transfermarkt.co.uk/eastbourne-borough/leistungsdaten/verein/3713",
    "https://www.transfermarkt.co.uk/dover-athletic/leistungsdaten/verein/3936",
    "https://www.transfermarkt.co.uk/enfield-town/leistungsdaten/verein/8665",
    "https://www.transfermarkt.co.uk/fc-salisbury/leistungsdaten/verein/56852",
    "https://www.transfermarkt.co.uk/afc-hornchurch/leistungsdaten/verein/3868",
    "https://www.transfermarkt.co.uk/chesham-united/leistungsdaten/verein/9153",
];
