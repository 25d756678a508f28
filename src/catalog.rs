//! Static reference list of recognized wine type and style names.
//!
//! This is the upstream feed's companion catalog, kept verbatim. The
//! list is read-only and process-wide; facet extraction tests each entry
//! against the current inventory and deduplicates, so the two literal
//! repeats ("Cinsault", "Tannat") never surface in derived facets.

pub const WINE_TYPES: &[&str] = &[
    "Cabernet",
    "Merlot",
    "Pinot Noir",
    "Syrah",
    "Shiraz",
    "Zinfandel",
    "Malbec",
    "Grenache",
    "Sangiovese",
    "Tempranillo",
    "Nebbiolo",
    "Barbera",
    "Carmenère",
    "Petit Verdot",
    "Mourvèdre",
    "Montepulciano",
    "Primitivo",
    "Carignan",
    "Cinsault",
    "Tannat",
    "Gamay",
    "Aglianico",
    "Touriga Nacional",
    "Dolcetto",
    "Pinotage",
    "Nero d'Avola",
    "Corvina",
    "Bonarda",
    "Schiava",
    "Teroldego",
    "Chardonnay",
    "Sauvignon Blanc",
    "Riesling",
    "Pinot Grigio",
    "Pinot Gris",
    "Chenin Blanc",
    "Viognier",
    "Semillon",
    "Gewürztraminer",
    "Moscato",
    "Albarino",
    "Torrontes",
    "Grüner Veltliner",
    "Verdelho",
    "Trebbiano",
    "Garganega",
    "Fiano",
    "Vermentino",
    "Cortese",
    "Assyrtiko",
    "Melon de Bourgogne",
    "Marsanne",
    "Roussanne",
    "Verdejo",
    "Picpoul",
    "Silvaner",
    "Palomino",
    "Pinot Blanc",
    "Arneis",
    "Viura",
    "Pedro Ximénez",
    "Rosé",
    "White Zinfandel",
    "Champagne",
    "Prosecco",
    "Cava",
    "Crémant",
    "Franciacorta",
    "Lambrusco",
    "Sekt",
    "Brut Nature",
    "Méthode Cap Classique",
    "Port",
    "Sherry",
    "Sauternes",
    "Tokaji",
    "Ice Wine",
    "Eiswein",
    "Madeira",
    "Muscat",
    "Late Harvest Wines",
    "Vin Santo",
    "Rutherglen Muscat",
    "Marsala",
    "Vermouth",
    "Commandaria",
    "Bordeaux",
    "Super Tuscan",
    "Rioja",
    "Chianti",
    "Brunello di Montalcino",
    "Barolo",
    "Barbaresco",
    "Beaujolais",
    "Valpolicella",
    "Amarone della Valpolicella",
    "Vinho Verde",
    "Châteauneuf-du-Pape",
    "Côtes du Rhône",
    "Cahors",
    "Torrontés",
    "Blaufränkisch",
    "Txakoli",
    "Retsina",
    "Furmint",
    "Saperavi",
    "Cinsault",
    "Bobal",
    "Mavrud",
    "Plavac Mali",
    "Xinomavro",
    "Negroamaro",
    "Agiorgitiko",
    "Falanghina",
    "Godello",
    "Schioppettino",
    "Blauer Portugieser",
    "Tannat",
    "Negrette",
    "Kadarka",
    "Aleatico",
    "Friulano",
];
