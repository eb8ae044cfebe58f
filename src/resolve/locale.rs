//! English word lists backing the generators in `faker`.

pub const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas",
    "Sarah", "Charles", "Karen", "Christopher", "Lisa", "Daniel", "Nancy", "Matthew",
    "Betty", "Anthony", "Margaret", "Mark", "Sandra", "Donald", "Ashley", "Steven",
    "Kimberly", "Paul", "Emily", "Andrew", "Donna", "Joshua", "Michelle", "Kenneth",
    "Carol", "Kevin", "Amanda", "Brian", "Melissa", "George", "Deborah", "Timothy",
    "Stephanie", "Priya", "Arjun", "Aisha", "Omar", "Mei", "Hiroshi", "Sofia", "Mateo",
    "Lucia", "Noah",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
    "Thomas", "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White",
    "Harris", "Sanchez", "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young",
    "Allen", "King", "Wright", "Scott", "Torres", "Nguyen", "Hill", "Flores", "Green",
    "Adams", "Nelson", "Baker", "Hall", "Rivera", "Campbell", "Mitchell", "Carter",
    "Roberts", "Sharma", "Patel", "Okafor", "Tanaka", "Kowalski", "Schmidt", "Rossi",
];

pub const MIDDLE_NAMES: &[&str] = &[
    "Alexander", "Grace", "James", "Rose", "Lee", "Marie", "Michael", "Ann", "Ray",
    "Lynn", "Jordan", "Quinn", "Avery", "Elliot", "Morgan", "Reese", "Taylor", "Jean",
];

pub const NAME_PREFIXES: &[&str] = &["Mr.", "Mrs.", "Ms.", "Miss", "Dr."];

pub const NAME_SUFFIXES: &[&str] = &["Jr.", "Sr.", "I", "II", "III", "IV", "V", "MD", "DDS", "PhD", "DVM"];

pub const JOB_DESCRIPTORS: &[&str] = &[
    "Lead", "Senior", "Direct", "Corporate", "Dynamic", "Future", "Product", "National",
    "Regional", "District", "Central", "Global", "Customer", "Investor", "International",
    "Legacy", "Forward", "Internal", "Human", "Chief", "Principal",
];

pub const JOB_AREAS: &[&str] = &[
    "Solutions", "Program", "Brand", "Security", "Research", "Marketing", "Directives",
    "Implementation", "Integration", "Functionality", "Response", "Paradigm", "Tactics",
    "Identity", "Markets", "Group", "Division", "Applications", "Optimization",
    "Operations", "Infrastructure", "Intranet", "Communications", "Web", "Branding",
    "Quality", "Assurance", "Mobility", "Accounts", "Data", "Creative", "Configuration",
    "Accountability", "Interactions", "Factors", "Usability", "Metrics",
];

pub const JOB_TYPES: &[&str] = &[
    "Supervisor", "Associate", "Executive", "Liaison", "Officer", "Manager", "Engineer",
    "Specialist", "Director", "Coordinator", "Administrator", "Architect", "Analyst",
    "Designer", "Planner", "Orchestrator", "Technician", "Developer", "Producer",
    "Consultant", "Assistant", "Facilitator", "Agent", "Representative", "Strategist",
];

pub const BIO_NOUNS: &[&str] = &[
    "coffee lover", "film buff", "traveler", "foodie", "bookworm", "runner", "gamer",
    "photographer", "gardener", "music enthusiast", "dog lover", "night owl", "tinkerer",
    "hiker", "chess player",
];

pub const BIO_SUFFIXES: &[&str] = &["🎓", "🌍", "☕", "📚", "🎧", "🏃", "✨", "🚀"];

pub const FREE_EMAIL_DOMAINS: &[&str] = &["gmail.com", "yahoo.com", "hotmail.com", "outlook.com", "proton.me"];

pub const DOMAIN_SUFFIXES: &[&str] = &["com", "net", "org", "io", "info", "biz", "name", "dev"];

pub const DOMAIN_WORDS: &[&str] = &[
    "quick", "bright", "silver", "honest", "tidy", "brave", "clever", "modest", "gentle",
    "rapid", "vivid", "jolly", "mellow", "sturdy", "nimble", "harbor", "meadow", "summit",
    "canyon", "orchard", "lantern", "compass", "anchor", "beacon", "pioneer", "falcon",
];

pub const STREET_NAMES: &[&str] = &[
    "Main", "Oak", "Pine", "Maple", "Cedar", "Elm", "Washington", "Lake", "Hill",
    "Park", "Sunset", "Highland", "River", "Church", "Mill", "Spring", "Meadow", "Willow",
    "Lincoln", "Jefferson", "Franklin", "Chestnut", "Walnut", "Ridge",
];

pub const STREET_SUFFIXES: &[&str] = &[
    "Street", "Avenue", "Road", "Boulevard", "Lane", "Drive", "Court", "Place", "Way",
    "Terrace", "Circle", "Parkway",
];

pub const CITIES: &[&str] = &[
    "Springfield", "Riverside", "Franklin", "Greenville", "Bristol", "Clinton", "Fairview",
    "Salem", "Madison", "Georgetown", "Arlington", "Ashland", "Burlington", "Manchester",
    "Oxford", "Jackson", "Milton", "Newport", "Auburn", "Dayton", "Lexington", "Kingston",
    "Portland", "Austin", "Denver", "Seattle", "Boston", "Chicago", "Pune", "Bengaluru",
];

pub const STATES: &[&str] = &[
    "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado", "Connecticut",
    "Delaware", "Florida", "Georgia", "Hawaii", "Idaho", "Illinois", "Indiana", "Iowa",
    "Kansas", "Kentucky", "Louisiana", "Maine", "Maryland", "Massachusetts", "Michigan",
    "Minnesota", "Mississippi", "Missouri", "Montana", "Nebraska", "Nevada",
    "New Hampshire", "New Jersey", "New Mexico", "New York", "North Carolina",
    "North Dakota", "Ohio", "Oklahoma", "Oregon", "Pennsylvania", "Rhode Island",
    "South Carolina", "South Dakota", "Tennessee", "Texas", "Utah", "Vermont", "Virginia",
    "Washington", "West Virginia", "Wisconsin", "Wyoming",
];

/// (name, ISO 3166-1 alpha-2)
pub const COUNTRIES: &[(&str, &str)] = &[
    ("United States", "US"),
    ("Canada", "CA"),
    ("Mexico", "MX"),
    ("Brazil", "BR"),
    ("Argentina", "AR"),
    ("United Kingdom", "GB"),
    ("Ireland", "IE"),
    ("France", "FR"),
    ("Germany", "DE"),
    ("Spain", "ES"),
    ("Italy", "IT"),
    ("Netherlands", "NL"),
    ("Sweden", "SE"),
    ("Norway", "NO"),
    ("Poland", "PL"),
    ("India", "IN"),
    ("China", "CN"),
    ("Japan", "JP"),
    ("South Korea", "KR"),
    ("Singapore", "SG"),
    ("Australia", "AU"),
    ("New Zealand", "NZ"),
    ("South Africa", "ZA"),
    ("Nigeria", "NG"),
    ("Kenya", "KE"),
    ("Egypt", "EG"),
    ("United Arab Emirates", "AE"),
];

pub const TIME_ZONES: &[&str] = &[
    "America/New_York", "America/Chicago", "America/Denver", "America/Los_Angeles",
    "America/Sao_Paulo", "Europe/London", "Europe/Paris", "Europe/Berlin", "Europe/Madrid",
    "Africa/Lagos", "Africa/Nairobi", "Asia/Dubai", "Asia/Kolkata", "Asia/Singapore",
    "Asia/Tokyo", "Asia/Shanghai", "Australia/Sydney", "Pacific/Auckland",
];

pub const COMPANY_SUFFIXES: &[&str] = &["Inc", "LLC", "Group", "and Sons", "Ltd", "Corp"];

pub const CURRENCY_CODES: &[&str] = &[
    "USD", "EUR", "GBP", "INR", "JPY", "CNY", "AUD", "CAD", "CHF", "SEK", "NZD", "SGD",
    "ZAR", "BRL", "MXN", "AED",
];

pub const PRODUCT_ADJECTIVES: &[&str] = &[
    "Small", "Ergonomic", "Rustic", "Intelligent", "Gorgeous", "Incredible", "Fantastic",
    "Practical", "Sleek", "Awesome", "Generic", "Handcrafted", "Handmade", "Licensed",
    "Refined", "Unbranded", "Tasty", "Elegant", "Modern", "Recycled",
];

pub const PRODUCT_MATERIALS: &[&str] = &[
    "Steel", "Wooden", "Concrete", "Plastic", "Cotton", "Granite", "Rubber", "Metal",
    "Soft", "Fresh", "Frozen", "Bronze", "Ceramic", "Silk",
];

pub const PRODUCTS: &[&str] = &[
    "Chair", "Car", "Computer", "Keyboard", "Mouse", "Bike", "Ball", "Gloves", "Pants",
    "Shirt", "Table", "Shoes", "Hat", "Towels", "Soap", "Tuna", "Chicken", "Fish",
    "Cheese", "Bacon", "Pizza", "Salad", "Sausages", "Chips", "Lamp", "Backpack",
];

pub const DEPARTMENTS: &[&str] = &[
    "Books", "Movies", "Music", "Games", "Electronics", "Computers", "Home", "Garden",
    "Tools", "Grocery", "Health", "Beauty", "Toys", "Kids", "Baby", "Clothing", "Shoes",
    "Jewelery", "Sports", "Outdoors", "Automotive", "Industrial",
];

pub const VEHICLE_MANUFACTURERS: &[&str] = &[
    "Toyota", "Honda", "Ford", "Chevrolet", "Nissan", "Hyundai", "Kia", "Volkswagen",
    "BMW", "Mercedes Benz", "Audi", "Tesla", "Subaru", "Mazda", "Volvo", "Tata",
    "Mahindra", "Maruti Suzuki",
];

pub const VEHICLE_MODELS: &[&str] = &[
    "Camry", "Corolla", "Civic", "Accord", "F-150", "Mustang", "Model 3", "Model Y",
    "Golf", "Jetta", "Altima", "Elantra", "Sportage", "Outback", "CX-5", "XC90",
    "Nexon", "Swift",
];

pub const VEHICLE_TYPES: &[&str] = &[
    "Sedan", "SUV", "Hatchback", "Coupe", "Convertible", "Minivan", "Wagon",
    "Crew Cab Pickup", "Extended Cab Pickup", "Cargo Van", "Passenger Van",
];

pub const COLOR_NAMES: &[&str] = &[
    "black", "white", "silver", "gray", "red", "blue", "green", "yellow", "orange",
    "maroon", "navy", "teal", "olive", "purple", "gold", "turquoise",
];

pub const FUEL_TYPES: &[&str] = &["Gasoline", "Diesel", "Electric", "Hybrid", "Flex Fuel"];

pub const LOREM_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed",
    "do", "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna",
    "aliqua", "enim", "ad", "minim", "veniam", "quis", "nostrud", "exercitation",
    "ullamco", "laboris", "nisi", "aliquip", "ex", "ea", "commodo", "consequat", "duis",
    "aute", "irure", "in", "reprehenderit", "voluptate", "velit", "esse", "cillum",
    "fugiat", "nulla", "pariatur", "excepteur", "sint", "occaecat", "cupidatat", "non",
    "proident", "sunt", "culpa", "qui", "officia", "deserunt", "mollit", "anim", "id",
    "est", "laborum", "vero", "accusamus", "iusto", "odio", "dignissimos", "ducimus",
    "blanditiis", "praesentium", "voluptatum", "deleniti", "atque", "corrupti", "quos",
    "dolores", "quas", "molestias", "excepturi", "occaecati", "cupiditate", "provident",
];
