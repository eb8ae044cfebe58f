use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::resolve::faker::Faker;
use crate::resolve::resolver::range_midpoint;
use crate::resolve::rules::{BIRTH_KEYWORDS, FUTURE_DATE_KEYWORDS, PAST_DATE_KEYWORDS, matches};
use crate::resolve::temporal::format_date;

/// Semantic meaning assigned to a form field.
///
/// Each variant owns one generation rule in [`Category::generate`]. Variants are
/// listed in the same order as the rule table that selects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    // Structural (control type decides)
    Checked,
    RangeMidpoint,
    LocalDateTime,
    IsoWeek,
    SearchPhrase,
    CalendarDate,
    YearMonth,
    TimeOfDay,

    // Identity
    BirthDate,
    FirstName,
    LastName,
    MiddleName,
    FullName,
    Username,
    NamePrefix,
    NameSuffix,
    Gender,
    Age,
    NationalId,
    Ethnicity,
    MaritalStatus,
    Religion,
    BloodGroup,
    Height,

    // Contact & digital
    Email,
    Phone,
    WebUrl,

    // Authentication
    Password,
    SecurityQuestion,
    SecurityAnswer,

    // Address & geography
    StreetAddress,
    SecondaryAddress,
    FullAddress,
    City,
    State,
    PostalCode,
    Country,
    CountryCode,
    Landmark,
    Latitude,
    Longitude,
    TimeZone,
    BuildingComplex,

    // Financial & banking
    CardNumber,
    CardCvv,
    CardExpiry,
    BankCode,
    MicrCode,
    AccountNumber,
    RoutingNumber,
    Iban,
    TaxId,
    Gstin,
    MonetaryAmount,
    CurrencyCode,
    TaxRate,
    PromoCode,
    ReferenceNumber,
    BankName,
    UpiId,
    CryptoWallet,

    // E-commerce & logistics
    ProductCode,
    ProductName,
    ProductCategory,
    Quantity,
    Weight,
    Vin,
    VehicleMake,
    VehicleModel,
    VehicleType,
    VehicleColor,
    FuelType,
    Dimensions,
    HexColor,
    Material,
    ItemCondition,
    TrackingNumber,
    Courier,
    DeliveryDate,
    ReturnPolicy,

    // Professional & education
    Company,
    JobTitle,
    YearsOfExperience,
    School,
    Degree,
    Gpa,
    Skills,
    Certifications,
    Projects,
    Achievements,
    Hobbies,
    CareerObjective,
    LinkedinProfile,
    Team,
    EmployeeId,
    JoiningDate,
    LeavingDate,
    NoticePeriod,
    WorkMode,
    Industry,

    // Digital assets
    Ipv4,
    Ipv6,
    MacAddress,
    Uuid,
    Slug,
    UserAgent,
    Port,
    Hostname,
    ApiEndpoint,
    MimeType,
    FileName,
    FileSize,
    Version,
    Environment,

    // Dates & time
    StartDate,
    EndDate,
    ScheduledDate,
    Year,
    Month,
    DayOfMonth,
    Duration,

    // Healthcare
    PatientId,
    Diagnosis,
    Medication,
    Allergies,
    Doctor,
    Hospital,
    InsuranceCompany,
    EmergencyContact,
    Relationship,

    // Real estate
    PropertyId,
    PropertyType,
    Bedrooms,
    Bathrooms,
    FloorArea,
    Rent,
    LeaseTerm,

    // Travel
    Destination,
    Origin,
    FlightNumber,
    Airline,
    Seat,

    // Tech stack
    ProgrammingLanguage,
    Ide,
    Framework,
    VersionControl,

    // Social & content
    ContentTitle,
    ContentBody,
    Tags,
    Subject,
    Rating,
    Review,

    // Retail & supply chain
    WarrantyPeriod,
    ReturnWindow,
    HsCode,
    WarehouseBin,

    // Large free text
    LongText,

    // Miscellaneous
    Language,
    Theme,
    Font,
    Plan,
    Status,
    Priority,
    LeadSource,
    Device,
    Reason,
    ActivationCode,
    Question,
    Answer,
    TemplateName,
    Campaign,
    DisplayLabel,
    Rank,
    MaxValue,
    MinValue,
    Percentage,
    Capacity,
    Coordinates,
    SortOrder,

    // Fallback tier
    FallbackNumber,
    FallbackPhrase,
    FallbackWord,
}

/// How a social or portfolio handle is rendered after the platform's base URL.
#[derive(Debug, Clone, Copy)]
enum Handle {
    Username,
    Number(i64, i64),
    Digits(usize),
}

/// Platform refinement of the URL category, first match wins.
const PROFILE_PLATFORMS: &[(&[&str], &str, Handle)] = &[
    (&["linkedin"], "https://linkedin.com/in/", Handle::Username),
    (&["github", "git_hub", "git"], "https://github.com/", Handle::Username),
    (&["twitter", "x_dot_com", "tweet"], "https://x.com/", Handle::Username),
    (&["facebook", "fb"], "https://facebook.com/", Handle::Username),
    (&["instagram", "insta", "ig"], "https://instagram.com/", Handle::Username),
    (&["youtube", "yt"], "https://youtube.com/@", Handle::Username),
    (&["tiktok", "tik_tok"], "https://tiktok.com/@", Handle::Username),
    (&["behance"], "https://behance.net/", Handle::Username),
    (&["dribbble", "dribble"], "https://dribbble.com/", Handle::Username),
    (&["medium"], "https://medium.com/@", Handle::Username),
    (&["substack"], "https://substack.com/@", Handle::Username),
    (&["stackoverflow", "stack_overflow"], "https://stackoverflow.com/users/", Handle::Number(100_000, 9_999_999)),
    (&["discord"], "https://discord.com/users/", Handle::Digits(18)),
    (&["twitch"], "https://twitch.tv/", Handle::Username),
    (&["reddit"], "https://reddit.com/u/", Handle::Username),
    (&["pinterest"], "https://pinterest.com/", Handle::Username),
    (&["snapchat", "snap"], "https://snapchat.com/add/", Handle::Username),
];

const BIO_KEYWORDS: &[&str] = &["bio", "about", "aboutme", "about_me", "who_i_am", "self_description"];
const COVER_LETTER_KEYWORDS: &[&str] = &["cover_letter", "coverletter", "motivation_letter", "letter_of_intent"];
const STATEMENT_KEYWORDS: &[&str] = &["sop", "statement_of_purpose", "personal_statement"];

const SENSITIVE: &[Category] = &[
    Category::Password,
    Category::SecurityAnswer,
    Category::CardNumber,
    Category::CardCvv,
    Category::CardExpiry,
    Category::AccountNumber,
    Category::RoutingNumber,
    Category::Iban,
    Category::NationalId,
    Category::TaxId,
];

impl Category {
    /// Whether values of this category should stay out of persisted traces.
    pub fn is_sensitive(self) -> bool {
        SENSITIVE.contains(&self)
    }

    /// Produce a value for a field of this category. `key` is the lowercase field key,
    /// used by categories that refine their output further.
    pub fn generate<R: Rng>(self, key: &str, f: &mut Faker<R>) -> String {
        use Category::*;

        match self {
            Checked => "true".into(),
            RangeMidpoint => range_midpoint(None, None),
            LocalDateTime => f.datetime_local(),
            IsoWeek => f.iso_week(),
            SearchPhrase => f.words(2),
            CalendarDate => calendar_date(key, f),
            YearMonth => f.year_month(),
            TimeOfDay => f.time_of_day(),

            BirthDate => format_date(f.birthdate(18, 65)),
            FirstName => f.first_name(),
            LastName => f.last_name(),
            MiddleName => f.middle_name(),
            FullName => f.full_name(),
            Username => f.username(),
            NamePrefix => f.name_prefix(),
            NameSuffix => f.name_suffix(),
            Gender => f.pick(&["Male", "Female", "Non-binary", "Prefer not to say"]).into(),
            Age => f.int(18, 75).to_string(),
            NationalId => f.alphanumeric(10).to_uppercase(),
            Ethnicity => f
                .pick(&[
                    "Asian",
                    "Black or African American",
                    "Hispanic or Latino",
                    "White",
                    "Two or More Races",
                    "Prefer not to say",
                ])
                .into(),
            MaritalStatus => f.pick(&["Single", "Married", "Divorced", "Widowed", "Separated"]).into(),
            Religion => f
                .pick(&[
                    "Christianity",
                    "Islam",
                    "Hinduism",
                    "Buddhism",
                    "Judaism",
                    "Other",
                    "Prefer not to say",
                ])
                .into(),
            BloodGroup => f.pick(&["A+", "A-", "B+", "B-", "O+", "O-", "AB+", "AB-"]).into(),
            Height => format!("{} cm", f.int(150, 200)),

            Email => f.email(),
            Phone => f.phone_national(),
            WebUrl => profile_url(key, f),

            Password => "TestPass@123".into(),
            SecurityQuestion => "What was the name of your first pet?".into(),
            SecurityAnswer => "Fluffy".into(),

            StreetAddress => f.street_address(false),
            SecondaryAddress => format!("Apt {}", f.int(1, 999)),
            FullAddress => f.street_address(true),
            City => f.city(),
            State => f.state(),
            PostalCode => f.zip_code(),
            Country => f.country(),
            CountryCode => f.country_code(),
            Landmark => format!("Near {}", f.company_name()),
            Latitude => f.latitude().to_string(),
            Longitude => f.longitude().to_string(),
            TimeZone => f.time_zone(),
            BuildingComplex => format!("{} Complex", f.company_name()),

            CardNumber => f.credit_card_number(),
            CardCvv => {
                let len = if matches(key, &["cid", "amex"]) { 4 } else { 3 };
                f.credit_card_cvv(len)
            }
            CardExpiry => f.card_expiry(),
            BankCode => format!("SBIN0{}", f.numeric(6)),
            MicrCode => f.numeric(9),
            AccountNumber => f.account_number(12),
            RoutingNumber => f.routing_number(),
            Iban => f.iban(),
            TaxId => format!("{}{}{}", f.alpha(5), f.numeric(4), f.alpha(1)).to_uppercase(),
            Gstin => format!("27{}{}{}1Z5", f.alpha(5), f.numeric(4), f.alpha(1)).to_uppercase(),
            MonetaryAmount => f.price(1_000, 100_000),
            CurrencyCode => f.currency_code(),
            TaxRate => "18".into(),
            PromoCode => "SAVE10".into(),
            ReferenceNumber => f.alphanumeric(10).to_uppercase(),
            BankName => f
                .pick(&[
                    "State Bank of India",
                    "HDFC Bank",
                    "ICICI Bank",
                    "Axis Bank",
                    "Kotak Mahindra",
                    "Bank of America",
                    "Chase Bank",
                    "Wells Fargo",
                    "Barclays",
                    "HSBC",
                ])
                .into(),
            UpiId => format!("{}@upi", f.username()),
            CryptoWallet => format!("0x{}", f.hex_lower(40)),

            ProductCode => f.alphanumeric(10).to_uppercase(),
            ProductName => f.product_name(),
            ProductCategory => f.department(),
            Quantity => f.int(1, 100).to_string(),
            Weight => format!("{} kg", f.int(1, 50)),
            Vin => f.vin(),
            VehicleMake => f.vehicle_manufacturer(),
            VehicleModel => f.vehicle_model(),
            VehicleType => f.vehicle_type(),
            VehicleColor => f.color_name(),
            FuelType => f.fuel_type(),
            Dimensions => format!("{} x {} x {} cm", f.int(5, 100), f.int(5, 100), f.int(5, 100)),
            HexColor => f.hex_color(),
            Material => f
                .pick(&[
                    "Cotton", "Polyester", "Leather", "Silk", "Wool", "Nylon", "Linen", "Denim",
                    "Synthetic", "Bamboo",
                ])
                .into(),
            ItemCondition => f.pick(&["New", "Like New", "Good", "Fair", "Poor", "Refurbished"]).into(),
            TrackingNumber => f.alphanumeric(15).to_uppercase(),
            Courier => f
                .pick(&[
                    "FedEx",
                    "DHL",
                    "UPS",
                    "USPS",
                    "BlueDart",
                    "Delhivery",
                    "Amazon Logistics",
                    "Ekart",
                    "Aramex",
                ])
                .into(),
            DeliveryDate => format_date(f.future_date()),
            ReturnPolicy => "30 days return policy".into(),

            Company => f.company_name(),
            JobTitle => f.job_title(),
            YearsOfExperience => f.int(1, 15).to_string(),
            School => format!("{} University", f.company_name()),
            Degree => "Bachelor of Technology".into(),
            Gpa => format!("{:.1}", f.float(6.0, 10.0)),
            Skills => "JavaScript, TypeScript, React, Node.js, SQL".into(),
            Certifications => "AWS Certified Developer, Google Cloud Associate".into(),
            Projects => "E-Commerce Platform, Task Management App".into(),
            Achievements => "Employee of the Year 2023, Dean's List".into(),
            Hobbies => "Reading, Photography, Hiking".into(),
            CareerObjective => "Motivated professional seeking opportunities to apply technical \
                                expertise in a dynamic environment."
                .into(),
            LinkedinProfile => format!("https://linkedin.com/in/{}", f.username()),
            Team => f
                .pick(&[
                    "Engineering",
                    "Marketing",
                    "Sales",
                    "Finance",
                    "HR",
                    "Operations",
                    "Design",
                    "Product",
                    "Legal",
                    "Customer Success",
                ])
                .into(),
            EmployeeId => format!("EMP{}", f.numeric(6)),
            JoiningDate => format_date(f.past_date()),
            LeavingDate => format_date(f.recent_datetime().date()),
            NoticePeriod => "30 days".into(),
            WorkMode => f
                .pick(&["Full-time", "Part-time", "Contract", "Freelance", "Remote", "Hybrid", "On-site"])
                .into(),
            Industry => f
                .pick(&[
                    "Technology",
                    "Healthcare",
                    "Finance",
                    "Education",
                    "Retail",
                    "Manufacturing",
                    "Consulting",
                    "Media",
                    "Real Estate",
                    "Logistics",
                ])
                .into(),

            Ipv4 => f.ipv4(),
            Ipv6 => f.ipv6(),
            MacAddress => f.mac_address(),
            Uuid => f.uuid(),
            Slug => f.slug(3),
            UserAgent => "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".into(),
            Port => f.port().to_string(),
            Hostname => f.domain_name(),
            ApiEndpoint => format!("https://api.{}/v1", f.domain_name()),
            MimeType => f
                .pick(&["application/json", "text/html", "image/png", "application/pdf", "video/mp4"])
                .into(),
            FileName => format!("{}_{}.pdf", f.word(), f.numeric(4)),
            FileSize => format!("{} MB", f.int(1, 10)),
            Version => format!("{}.{}.{}", f.int(1, 9), f.int(0, 9), f.int(0, 99)),
            Environment => f.pick(&["production", "staging", "development", "testing"]).into(),

            StartDate => format_date(f.past_date()),
            EndDate | ScheduledDate => format_date(f.future_date()),
            Year => f.recent_year().to_string(),
            Month => f.recent_month_number().to_string(),
            DayOfMonth => f.int(1, 28).to_string(),
            Duration => format!("{} months", f.int(1, 24)),

            PatientId => format!("PAT{}", f.numeric(8)),
            Diagnosis => f.pick(&["Hypertension", "Diabetes Type 2", "Asthma", "Arthritis", "None"]).into(),
            Medication => f
                .pick(&["Metformin 500mg", "Lisinopril 10mg", "Atorvastatin 20mg", "None"])
                .into(),
            Allergies => f.pick(&["None", "Penicillin", "Peanuts", "Latex", "Aspirin"]).into(),
            Doctor => format!("Dr. {}", f.full_name()),
            Hospital => format!("{} Medical Center", f.city()),
            InsuranceCompany => f
                .pick(&[
                    "Blue Cross Blue Shield",
                    "Aetna",
                    "Cigna",
                    "UnitedHealth",
                    "Humana",
                    "Star Health",
                    "HDFC Ergo",
                ])
                .into(),
            EmergencyContact => f.full_name(),
            Relationship => f
                .pick(&["Father", "Mother", "Spouse", "Sibling", "Child", "Friend", "Guardian", "Parent"])
                .into(),

            PropertyId => format!("PROP{}", f.numeric(8)),
            PropertyType => f
                .pick(&[
                    "Apartment",
                    "House",
                    "Villa",
                    "Studio",
                    "Duplex",
                    "Townhouse",
                    "Condo",
                    "Penthouse",
                    "Commercial",
                    "Office",
                ])
                .into(),
            Bedrooms => f.int(1, 6).to_string(),
            Bathrooms => f.int(1, 4).to_string(),
            FloorArea => format!("{} sqft", f.int(500, 5000)),
            Rent => f.price(5_000, 100_000),
            LeaseTerm => f.pick(&["6 months", "1 year", "2 years", "3 years", "Month to Month"]).into(),

            Destination | Origin => f.city(),
            FlightNumber => format!("{}{}", f.pick(&["AA", "BA", "EK", "QF", "SQ"]), f.int(100, 9999)),
            Airline => f
                .pick(&[
                    "American Airlines",
                    "British Airways",
                    "Emirates",
                    "Qantas",
                    "Singapore Airlines",
                    "Lufthansa",
                    "Cathay Pacific",
                ])
                .into(),
            Seat => format!("{}{}", f.int(1, 50), f.pick(&["A", "B", "C", "D", "E", "F"])),

            ProgrammingLanguage => f
                .pick(&[
                    "JavaScript", "TypeScript", "Python", "Go", "Rust", "Java", "C++", "Swift",
                    "Kotlin", "PHP",
                ])
                .into(),
            Ide => f
                .pick(&["VS Code", "IntelliJ IDEA", "PyCharm", "Sublime Text", "Vim", "Neovim", "WebStorm"])
                .into(),
            Framework => f
                .pick(&[
                    "React",
                    "Next.js",
                    "Vue",
                    "Angular",
                    "Svelte",
                    "Express",
                    "Django",
                    "FastAPI",
                    "Spring Boot",
                ])
                .into(),
            VersionControl => f.pick(&["GitHub", "GitLab", "Bitbucket", "Azure DevOps"]).into(),

            ContentTitle | Subject | Reason => f.sentence(),
            ContentBody | Review | Answer => f.paragraph(),
            Tags => f.words(5).split(' ').collect::<Vec<_>>().join(", "),
            Rating => f.int(1, 5).to_string(),

            WarrantyPeriod => format!("{} Years", f.int(1, 5)),
            ReturnWindow => format!("{} Days", f.int(7, 90)),
            HsCode => f.numeric(8),
            WarehouseBin => format!("WH-{}-{}", f.alphanumeric(4).to_uppercase(), f.int(1, 50)),

            LongText => long_text(key, f),

            Language => f
                .pick(&[
                    "English",
                    "Hindi",
                    "Spanish",
                    "French",
                    "German",
                    "Chinese",
                    "Arabic",
                    "Portuguese",
                    "Japanese",
                    "Korean",
                ])
                .into(),
            Theme => f.pick(&["Light", "Dark", "Auto", "System"]).into(),
            Font => f.pick(&["Arial", "Roboto", "Inter", "Open Sans", "Lato", "Montserrat"]).into(),
            Plan => f
                .pick(&["Free", "Basic", "Pro", "Business", "Enterprise", "Premium", "Starter"])
                .into(),
            Status => f
                .pick(&[
                    "Active",
                    "Inactive",
                    "Pending",
                    "Approved",
                    "Rejected",
                    "In Review",
                    "Completed",
                    "Draft",
                ])
                .into(),
            Priority => f.pick(&["Low", "Medium", "High", "Critical", "Urgent"]).into(),
            LeadSource => f
                .pick(&[
                    "Google",
                    "LinkedIn",
                    "Facebook",
                    "Referral",
                    "Email Campaign",
                    "Direct",
                    "Event",
                    "Twitter",
                ])
                .into(),
            Device => f.pick(&["iOS", "Android", "Windows", "MacOS", "Linux", "Web"]).into(),
            ActivationCode => f.alphanumeric(16).to_uppercase(),
            Question => format!("{}?", f.sentence()),
            TemplateName => format!("{} Template", f.word()),
            Campaign => {
                let word = f.word();
                let year = f.recent_datetime().date().format("%Y").to_string();
                format!("{} {} Campaign", word, year)
            }
            DisplayLabel => f.word(),
            Rank | MinValue | Percentage | SortOrder => f.int(1, 100).to_string(),
            MaxValue => f.int(100, 10_000).to_string(),
            Capacity => f.int(10, 1_000).to_string(),
            Coordinates => format!("{}, {}", f.latitude(), f.longitude()),

            FallbackNumber => f.int(1, 100).to_string(),
            FallbackPhrase => f.words(2),
            FallbackWord => f.word(),
        }
    }
}

/// `date`-typed controls: birth-date unless the key names a past or future event.
fn calendar_date<R: Rng>(key: &str, f: &mut Faker<R>) -> String {
    let date = if matches(key, BIRTH_KEYWORDS) {
        f.birthdate(18, 65)
    } else if FUTURE_DATE_KEYWORDS.iter().any(|set| matches(key, set)) {
        f.future_date()
    } else if PAST_DATE_KEYWORDS.iter().any(|set| matches(key, set)) {
        f.past_date()
    } else {
        f.birthdate(18, 65)
    };
    format_date(date)
}

fn profile_url<R: Rng>(key: &str, f: &mut Faker<R>) -> String {
    for (keywords, base, handle) in PROFILE_PLATFORMS {
        if matches(key, keywords) {
            let handle = match handle {
                Handle::Username => f.username(),
                Handle::Number(min, max) => f.int(*min, *max).to_string(),
                Handle::Digits(len) => f.numeric(*len),
            };
            return format!("{}{}", base, handle);
        }
    }
    f.url()
}

fn long_text<R: Rng>(key: &str, f: &mut Faker<R>) -> String {
    if matches(key, BIO_KEYWORDS) {
        return f.bio();
    }
    if matches(key, &["address"]) {
        return f.street_address(true);
    }
    if matches(key, COVER_LETTER_KEYWORDS) {
        let body = f.paragraphs(2);
        let signature = f.full_name();
        return format!("Dear Hiring Manager,\n\n{}\n\nSincerely,\n{}", body, signature);
    }
    if matches(key, STATEMENT_KEYWORDS) {
        return f.paragraphs(3);
    }
    f.paragraph()
}

impl Category {
    /// Snake-case name, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        use Category::*;

        match self {
            Checked => "checked",
            RangeMidpoint => "range_midpoint",
            LocalDateTime => "local_date_time",
            IsoWeek => "iso_week",
            SearchPhrase => "search_phrase",
            CalendarDate => "calendar_date",
            YearMonth => "year_month",
            TimeOfDay => "time_of_day",
            BirthDate => "birth_date",
            FirstName => "first_name",
            LastName => "last_name",
            MiddleName => "middle_name",
            FullName => "full_name",
            Username => "username",
            NamePrefix => "name_prefix",
            NameSuffix => "name_suffix",
            Gender => "gender",
            Age => "age",
            NationalId => "national_id",
            Ethnicity => "ethnicity",
            MaritalStatus => "marital_status",
            Religion => "religion",
            BloodGroup => "blood_group",
            Height => "height",
            Email => "email",
            Phone => "phone",
            WebUrl => "web_url",
            Password => "password",
            SecurityQuestion => "security_question",
            SecurityAnswer => "security_answer",
            StreetAddress => "street_address",
            SecondaryAddress => "secondary_address",
            FullAddress => "full_address",
            City => "city",
            State => "state",
            PostalCode => "postal_code",
            Country => "country",
            CountryCode => "country_code",
            Landmark => "landmark",
            Latitude => "latitude",
            Longitude => "longitude",
            TimeZone => "time_zone",
            BuildingComplex => "building_complex",
            CardNumber => "card_number",
            CardCvv => "card_cvv",
            CardExpiry => "card_expiry",
            BankCode => "bank_code",
            MicrCode => "micr_code",
            AccountNumber => "account_number",
            RoutingNumber => "routing_number",
            Iban => "iban",
            TaxId => "tax_id",
            Gstin => "gstin",
            MonetaryAmount => "monetary_amount",
            CurrencyCode => "currency_code",
            TaxRate => "tax_rate",
            PromoCode => "promo_code",
            ReferenceNumber => "reference_number",
            BankName => "bank_name",
            UpiId => "upi_id",
            CryptoWallet => "crypto_wallet",
            ProductCode => "product_code",
            ProductName => "product_name",
            ProductCategory => "product_category",
            Quantity => "quantity",
            Weight => "weight",
            Vin => "vin",
            VehicleMake => "vehicle_make",
            VehicleModel => "vehicle_model",
            VehicleType => "vehicle_type",
            VehicleColor => "vehicle_color",
            FuelType => "fuel_type",
            Dimensions => "dimensions",
            HexColor => "hex_color",
            Material => "material",
            ItemCondition => "item_condition",
            TrackingNumber => "tracking_number",
            Courier => "courier",
            DeliveryDate => "delivery_date",
            ReturnPolicy => "return_policy",
            Company => "company",
            JobTitle => "job_title",
            YearsOfExperience => "years_of_experience",
            School => "school",
            Degree => "degree",
            Gpa => "gpa",
            Skills => "skills",
            Certifications => "certifications",
            Projects => "projects",
            Achievements => "achievements",
            Hobbies => "hobbies",
            CareerObjective => "career_objective",
            LinkedinProfile => "linkedin_profile",
            Team => "team",
            EmployeeId => "employee_id",
            JoiningDate => "joining_date",
            LeavingDate => "leaving_date",
            NoticePeriod => "notice_period",
            WorkMode => "work_mode",
            Industry => "industry",
            Ipv4 => "ipv4",
            Ipv6 => "ipv6",
            MacAddress => "mac_address",
            Uuid => "uuid",
            Slug => "slug",
            UserAgent => "user_agent",
            Port => "port",
            Hostname => "hostname",
            ApiEndpoint => "api_endpoint",
            MimeType => "mime_type",
            FileName => "file_name",
            FileSize => "file_size",
            Version => "version",
            Environment => "environment",
            StartDate => "start_date",
            EndDate => "end_date",
            ScheduledDate => "scheduled_date",
            Year => "year",
            Month => "month",
            DayOfMonth => "day_of_month",
            Duration => "duration",
            PatientId => "patient_id",
            Diagnosis => "diagnosis",
            Medication => "medication",
            Allergies => "allergies",
            Doctor => "doctor",
            Hospital => "hospital",
            InsuranceCompany => "insurance_company",
            EmergencyContact => "emergency_contact",
            Relationship => "relationship",
            PropertyId => "property_id",
            PropertyType => "property_type",
            Bedrooms => "bedrooms",
            Bathrooms => "bathrooms",
            FloorArea => "floor_area",
            Rent => "rent",
            LeaseTerm => "lease_term",
            Destination => "destination",
            Origin => "origin",
            FlightNumber => "flight_number",
            Airline => "airline",
            Seat => "seat",
            ProgrammingLanguage => "programming_language",
            Ide => "ide",
            Framework => "framework",
            VersionControl => "version_control",
            ContentTitle => "content_title",
            ContentBody => "content_body",
            Tags => "tags",
            Subject => "subject",
            Rating => "rating",
            Review => "review",
            WarrantyPeriod => "warranty_period",
            ReturnWindow => "return_window",
            HsCode => "hs_code",
            WarehouseBin => "warehouse_bin",
            LongText => "long_text",
            Language => "language",
            Theme => "theme",
            Font => "font",
            Plan => "plan",
            Status => "status",
            Priority => "priority",
            LeadSource => "lead_source",
            Device => "device",
            Reason => "reason",
            ActivationCode => "activation_code",
            Question => "question",
            Answer => "answer",
            TemplateName => "template_name",
            Campaign => "campaign",
            DisplayLabel => "display_label",
            Rank => "rank",
            MaxValue => "max_value",
            MinValue => "min_value",
            Percentage => "percentage",
            Capacity => "capacity",
            Coordinates => "coordinates",
            SortOrder => "sort_order",
            FallbackNumber => "fallback_number",
            FallbackPhrase => "fallback_phrase",
            FallbackWord => "fallback_word",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
