//! The ordered keyword table that maps a field key to a [`Category`].
//!
//! Rules are tried top to bottom and the first match wins. Several keyword sets
//! overlap (`"name"` is a substring of `"username"`, `"addr"` of `"address"`), so the
//! position of a rule is part of its meaning. Do not sort this table.

use crate::resolve::category::Category;

/// One row of the table: a category and the signals that select it.
///
/// A rule matches when the control type equals `input_type`, or the tag equals `tag`,
/// or any keyword is a substring of the lowercase key.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub category: Category,
    pub input_type: Option<&'static str>,
    pub tag: Option<&'static str>,
    pub keywords: &'static [&'static str],
}

impl Rule {
    const fn keywords(category: Category, keywords: &'static [&'static str]) -> Self {
        Self { category, input_type: None, tag: None, keywords }
    }

    const fn typed(category: Category, input_type: &'static str, keywords: &'static [&'static str]) -> Self {
        Self { category, input_type: Some(input_type), tag: None, keywords }
    }

    const fn tagged(category: Category, tag: &'static str, keywords: &'static [&'static str]) -> Self {
        Self { category, input_type: None, tag: Some(tag), keywords }
    }

    pub fn matches(&self, key: &str, input_type: &str, tag: &str) -> bool {
        self.input_type == Some(input_type) || self.tag == Some(tag) || matches(key, self.keywords)
    }
}

/// Case-sensitive substring test; callers lowercase the key first.
pub fn matches(key: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| key.contains(k))
}

/// First rule matching the key, type and tag.
pub fn find_rule(key: &str, input_type: &str, tag: &str) -> Option<&'static Rule> {
    RULES.iter().find(|rule| rule.matches(key, input_type, tag))
}

pub const BIRTH_KEYWORDS: &[&str] = &[
    "dob", "birth", "birthday", "date_of_birth", "dateofbirth", "birthdate",
    "birth_date", "bday", "born", "born_on", "date_born", "birth_day",
    "birth_year", "birthyear", "year_of_birth", "yearofbirth", "dob_date",
    "dobfield", "birth_dt", "bdate", "dob_field",
];

const DELIVERY_DATE_KEYWORDS: &[&str] = &[
    "delivery_date", "deliverydate", "expected_delivery", "eta",
    "estimated_delivery", "ship_date", "shipdate", "dispatch_date",
    "dispatchdate", "arrival_date", "arrivaldate",
];

const JOINING_DATE_KEYWORDS: &[&str] = &[
    "joining_date", "joiningdate", "join_date", "joindate",
    "start_date", "startdate", "commencement_date", "hire_date",
    "hiredate", "employment_start", "onboarding_date",
];

const START_DATE_KEYWORDS: &[&str] = &[
    "start_date", "startdate", "from_date", "fromdate", "begin_date",
    "begindate", "commencement", "effective_date", "effectivedate",
    "valid_from", "validfrom", "issue_date", "issuedate",
    "created_date", "createddate", "registration_date", "enrollmentdate",
];

const END_DATE_KEYWORDS: &[&str] = &[
    "end_date", "enddate", "to_date", "todate", "expiry_date",
    "expirydate", "expiration_date", "expirationdate", "valid_to",
    "validto", "valid_till", "close_date", "closedate",
    "deadline", "due_date", "duedate", "target_date", "targetdate",
    "completion_date", "completiondate",
];

const SCHEDULED_DATE_KEYWORDS: &[&str] = &[
    "schedule_date", "scheduledate", "appointment_date", "appointmentdate",
    "meeting_date", "meetingdate", "event_date", "eventdate",
    "interview_date", "interviewdate", "visit_date", "visitdate",
    "booking_date", "bookingdate", "reservation_date", "reservationdate",
    "check_in", "checkin", "check_out", "checkout",
    "travel_date", "traveldate", "departure_date", "departuredate",
    "arrival_date", "arrivaldate", "flight_date",
];

/// Keyword sets naming an upcoming event; used to refine `date`-typed controls.
pub const FUTURE_DATE_KEYWORDS: &[&[&str]] = &[DELIVERY_DATE_KEYWORDS, END_DATE_KEYWORDS, SCHEDULED_DATE_KEYWORDS];

/// Keyword sets naming a past event; used to refine `date`-typed controls.
pub const PAST_DATE_KEYWORDS: &[&[&str]] = &[JOINING_DATE_KEYWORDS, START_DATE_KEYWORDS];

pub static RULES: &[Rule] = &[
    Rule::keywords(Category::BirthDate, BIRTH_KEYWORDS),

    // ---- Names & identity ----
    Rule::keywords(Category::FirstName, &[
        "firstname", "first_name", "fname", "given", "forename",
        "givenname", "given_name", "first", "f_name", "firstnm",
        "first_nm", "fn", "prenom", "nombre", "vorname", "nome",
        "christian_name", "baptismal_name", "legal_first", "legal_firstname",
        "contact_first", "billing_first", "shipping_first", "user_first",
        "account_first", "member_first", "customer_first", "buyer_first",
        "applicant_first", "employee_first", "student_first", "patient_first",
        "guardian_first", "parent_first", "emergency_first", "spouse_first",
        "first_name_field", "fname_input", "given_nm", "firstname_input",
    ]),
    Rule::keywords(Category::LastName, &[
        "lastname", "last_name", "lname", "surname", "family",
        "familyname", "family_name", "last", "l_name", "lastnm",
        "last_nm", "ln", "apellido", "nachname", "cognome",
        "legal_last", "legal_lastname", "contact_last", "billing_last",
        "shipping_last", "user_last", "account_last", "member_last",
        "customer_last", "buyer_last", "applicant_last", "employee_last",
        "student_last", "patient_last", "guardian_last", "parent_last",
        "emergency_last", "spouse_last", "last_name_field", "lname_input",
        "family_nm", "lastname_input", "sir_name", "sirname",
    ]),
    Rule::keywords(Category::MiddleName, &[
        "middlename", "middle_name", "mname", "middleinitial", "middle_initial",
        "middle", "mid_name", "second_name", "secondname", "middle_nm",
        "mnm", "mi", "paternal", "maternal", "middle_name_field",
    ]),
    Rule::keywords(Category::FullName, &[
        "fullname", "full_name", "name", "customer_name", "display_name",
        "wholename", "whole_name", "complete_name", "completename",
        "legal_name", "legalname", "full_legal_name", "your_name",
        "yourname", "person_name", "personname", "member_name", "membername",
        "account_name", "accountname", "profile_name", "profilename",
        "contact_name", "contactname", "billing_name", "billingname",
        "shipping_name", "shippingname", "recipient_name", "recipientname",
        "payee_name", "payeename", "cardholder", "card_holder",
        "card_holder_name", "cardholdername", "name_on_card", "nameoncard",
        "depositor_name", "beneficiary_name", "applicant_name", "owner_name",
        "full_nm", "nombre_completo", "nom_complet", "vollständiger_name",
        "nome_completo", "patient_name", "student_name", "employee_name",
        "user_name_full", "author_name", "respondent_name",
    ]),
    Rule::keywords(Category::Username, &[
        "username", "user_name", "handle", "login", "userid", "nickname",
        "uname", "u_name", "user_id", "screen_name", "screenname",
        "alias", "user_handle", "userhandle", "account_id", "accountid",
        "login_name", "loginname", "login_id", "loginid", "sign_in_name",
        "signin_name", "member_id", "memberid", "profile_id", "profileid",
        "player_name", "playername", "gamer_tag", "gamertag", "gamer_id",
        "discord_name", "steam_name", "psn_id", "xbox_tag", "battletag",
        "preferred_username", "nick", "online_name", "forum_name",
        "chat_name", "display_id", "public_name", "public_id",
    ]),
    Rule::keywords(Category::NamePrefix, &[
        "prefix", "title", "salutation", "honorific", "name_prefix",
        "name_title", "greeting", "name_greeting", "mr_ms", "mr_mrs",
        "courtesy_title", "name_salutation", "honorific_prefix",
        "personal_title", "form_of_address", "gender_title",
    ]),
    Rule::keywords(Category::NameSuffix, &[
        "suffix", "name_suffix", "generational_suffix", "generation",
        "jr", "sr", "ii", "iii", "phd", "md", "esq",
    ]),
    Rule::keywords(Category::Gender, &[
        "gender", "sex", "gender_identity", "gender_type", "biological_sex",
        "sex_at_birth", "legal_gender", "pronoun", "pronouns", "pronoun_preference",
    ]),
    Rule::keywords(Category::Age, &[
        "age", "years_old", "current_age", "age_years", "person_age",
        "user_age", "applicant_age", "patient_age",
    ]),
    Rule::keywords(Category::NationalId, &[
        "nationality", "citizenship", "national_id", "ssn", "social_security",
        "social_security_number", "nin", "nino", "national_insurance",
        "passport_number", "passport_no", "passport_num", "aadhar",
        "aadhar_number", "aadharcard", "voter_id", "voterid", "voter_card",
        "driving_license", "drivinglicense", "dl_number", "license_number",
        "drivers_license", "driver_license", "dl_no", "dl_num",
    ]),
    Rule::keywords(Category::Ethnicity, &["ethnicity", "race", "ethnic_group", "ethnic_origin"]),
    Rule::keywords(Category::MaritalStatus, &[
        "marital_status", "marital", "civil_status", "relationship_status",
        "married", "single", "divorced", "widowed",
    ]),
    Rule::keywords(Category::Religion, &["religion", "faith", "belief", "denomination"]),
    Rule::keywords(Category::BloodGroup, &["blood_group", "bloodgroup", "blood_type", "bloodtype"]),
    Rule::keywords(Category::Height, &["height", "weight_height", "stature", "person_height"]),

    // ---- Contact & digital ----
    Rule::typed(Category::Email, "email", &[
        "email", "mail", "e-mail", "email_address", "emailaddress",
        "email_addr", "emailaddr", "e_mail", "electronic_mail",
        "contact_email", "work_email", "personal_email", "primary_email",
        "secondary_email", "alternate_email", "alt_email", "user_email",
        "account_email", "member_email", "customer_email", "billing_email",
        "shipping_email", "support_email", "notification_email",
        "recovery_email", "backup_email", "login_email", "register_email",
        "signup_email", "office_email", "corporate_email", "business_email",
        "school_email", "edu_email", "edu_mail", "email_id", "emailid",
        "email_input", "email_field", "email_box", "your_email",
        "preferred_email", "new_email", "old_email", "confirm_email",
        "repeat_email", "verify_email", "email_confirmation", "email_confirm",
        "addr", "email_address_field", "mail_address",
    ]),
    Rule::typed(Category::Phone, "tel", &[
        "phone", "mobile", "cell", "contact", "tel", "fax", "dial",
        "telephone", "phone_number", "phonenumber", "phone_num", "phonenum",
        "mobile_number", "mobilenumber", "mobile_num", "mobilenum",
        "cell_number", "cellnumber", "cell_num", "cellnum",
        "contact_number", "contactnumber", "contact_no", "contactno",
        "home_phone", "homephone", "work_phone", "workphone",
        "office_phone", "officephone", "business_phone", "businessphone",
        "primary_phone", "secondary_phone", "alternate_phone", "alt_phone",
        "emergency_phone", "whatsapp", "whatsapp_number", "viber",
        "sms", "sms_number", "text_number", "textnumber",
        "landline", "land_line", "extension", "ext", "phone_ext",
        "phone_extension", "direct_line", "direct_dial", "pager",
        "toll_free", "tollfree", "phone_field", "tel_field", "phone_input",
        "phone_no", "phoneno", "mob", "mob_no", "mobno", "mob_num",
        "mobile_field", "cell_field", "tel_input", "phone1", "phone2",
        "phone3", "mobile1", "mobile2", "contact_phone", "contactphone",
    ]),
    Rule::typed(Category::WebUrl, "url", &[
        "url", "website", "portfolio", "link", "site", "domain",
        "web", "webpage", "web_page", "web_address", "webaddress",
        "homepage", "home_page", "personal_site", "personalsite",
        "personal_website", "personalwebsite", "blog", "blog_url",
        "portfolio_url", "portfoliourl", "online_profile", "onlineprofile",
        "profile_url", "profileurl", "social_link", "sociallink",
        "external_link", "externallink", "ref_url", "refurl",
        "company_website", "companywebsite", "business_url", "businessurl",
        "company_url", "companyurl", "org_website", "orgwebsite",
        "school_website", "schoolwebsite", "university_website", "resource_url",
        "callback_url", "redirect_url", "return_url", "source_url",
        "image_url", "avatar_url", "photo_url", "thumbnail_url",
        "cover_url", "banner_url", "media_url", "video_url", "doc_url",
        "file_url", "download_url", "stream_url", "embed_url",
    ]),

    // ---- Authentication ----
    Rule::typed(Category::Password, "password", &[
        "password", "passwd", "pass", "pwd", "secret", "pin_code",
        "passphrase", "pass_phrase", "access_code", "accesscode",
        "secret_key", "secretkey", "api_key", "apikey", "api_secret",
        "apisecret", "auth_token", "authtoken", "token", "auth_key",
        "authkey", "private_key", "privatekey", "security_key", "securitykey",
        "login_password", "loginpassword", "account_password", "accountpassword",
        "current_password", "currentpassword", "new_password", "newpassword",
        "old_password", "oldpassword", "confirm_password", "confirmpassword",
        "repeat_password", "repeatpassword", "verify_password", "verifypassword",
        "retype_password", "retypepassword", "password_confirm", "passwordconfirm",
        "pin", "mpin", "atm_pin", "bank_pin", "otp", "one_time_password",
        "totp", "hotp", "verification_code", "verificationcode", "security_code",
        "securitycode", "access_token", "bearer_token", "user_secret",
        "user_password", "master_password", "masterpassword",
    ]),
    Rule::keywords(Category::SecurityQuestion, &[
        "security_question", "securityquestion", "secret_question", "secretquestion",
    ]),
    Rule::keywords(Category::SecurityAnswer, &[
        "security_answer", "securityanswer", "secret_answer", "secretanswer",
    ]),

    // ---- Address & geography ----
    Rule::keywords(Category::StreetAddress, &[
        "street", "address1", "addr1", "line1", "house", "st_addr",
        "street_address", "streetaddress", "address_line1", "addressline1",
        "addr_line1", "addrline1", "house_number", "housenumber",
        "house_no", "houseno", "building_number", "buildingnumber",
        "plot_number", "plotnumber", "plot_no", "plotno",
        "door_number", "doornumber", "door_no", "doorno",
        "flat_number", "flatnumber", "flat_no", "flatno",
        "street_line", "streetline", "mailing_street", "primary_street",
        "home_street", "work_street", "office_street", "billing_street",
        "shipping_street", "delivery_street", "correspondence_street",
        "permanent_address", "current_address", "present_address",
        "residential_address", "resaddress", "postal_address",
        "street_number", "streetnumber", "street_no", "streetno",
    ]),
    Rule::keywords(Category::SecondaryAddress, &[
        "address2", "addr2", "line2", "apt", "suite", "unit", "flat", "building",
        "address_line2", "addressline2", "addr_line2", "addrline2",
        "apartment", "apartment_number", "apartmentnumber",
        "apt_number", "aptnumber", "apt_no", "aptno", "apt_num",
        "suite_number", "suitenumber", "suite_no", "suiteno",
        "unit_number", "unitnumber", "unit_no", "unitno",
        "floor", "floor_number", "floornumber", "floor_no", "floorno",
        "room", "room_number", "roomnumber", "room_no", "roomno",
        "building_name", "buildingname", "block", "block_number",
        "blocknumber", "block_no", "blockno", "sector", "tower",
        "wing", "phase", "pocket", "colony", "extension",
        "secondary_address", "secondary_addr", "addr_detail", "address_detail",
        "additional_address", "additionaladdress", "extra_address",
    ]),
    Rule::keywords(Category::FullAddress, &[
        "address", "addr", "location", "full_address", "fulladdress",
        "complete_address", "completeaddress", "mailing_address", "mailingaddress",
        "billing_address", "billingaddress", "shipping_address", "shippingaddress",
        "delivery_address", "deliveryaddress", "home_address", "homeaddress",
        "work_address", "workaddress", "office_address", "officeaddress",
        "current_addr", "permanent_addr", "residential_addr",
        "business_address", "businessaddress", "company_address", "companyaddress",
        "correspondence_address", "registered_address", "registeredaddress",
        "contact_address", "contactaddress", "primary_address", "primaryaddress",
        "secondary_address_full", "alt_address", "alternate_address",
        "warehouse_address", "pickup_address", "return_address",
        "physical_address", "physicaladdress", "legal_address", "legaladdress",
    ]),
    Rule::keywords(Category::City, &[
        "city", "town", "locality", "suburb", "city_name", "cityname",
        "town_name", "townname", "village", "municipality", "metro",
        "metropolis", "district", "district_name", "districtname",
        "billing_city", "billingcity", "shipping_city", "shippingcity",
        "delivery_city", "deliverycity", "home_city", "homecity",
        "work_city", "workcity", "office_city", "officecity",
        "mailing_city", "mailingcity", "primary_city", "current_city",
        "birth_city", "birthcity", "city_of_birth", "hometown",
        "home_town", "origin_city", "destination_city", "nearest_city",
        "preferred_city", "residential_city", "permanent_city",
    ]),
    Rule::keywords(Category::State, &[
        "state", "province", "region", "zone", "county",
        "state_name", "statename", "province_name", "provincename",
        "region_name", "regionname", "territory", "prefecture",
        "billing_state", "billingstate", "shipping_state", "shippingstate",
        "delivery_state", "deliverystate", "home_state", "homestate",
        "work_state", "workstate", "office_state", "officestate",
        "mailing_state", "mailingstate", "primary_state", "current_state",
        "birth_state", "birthstate", "state_of_birth", "origin_state",
        "residential_state", "permanent_state", "correspondence_state",
        "state_province", "stateprovince", "state_region",
        "administrative_area", "admin_area", "area", "division",
    ]),
    Rule::keywords(Category::PostalCode, &[
        "zip", "postal", "postcode", "pincode", "pin_code",
        "zipcode", "zip_code", "postal_code", "postalcode",
        "post_code", "post_zip", "zip_postal", "area_code",
        "billing_zip", "billingzip", "shipping_zip", "shippingzip",
        "delivery_zip", "deliveryzip", "home_zip", "homezip",
        "work_zip", "workzip", "office_zip", "officezip",
        "mailing_zip", "mailingzip", "primary_zip", "current_zip",
        "origin_zip", "destination_zip", "from_zip", "to_zip",
        "billing_postal", "shipping_postal", "billing_postcode", "shipping_postcode",
        "zip_code_field", "postal_field", "pin_field", "pincode_field",
        "zipfield", "postalfield", "zip5", "zip4", "zip_ext",
    ]),
    Rule::keywords(Category::Country, &[
        "country", "nation", "country_name", "countryname",
        "nationality", "citizenship", "country_of_origin", "origin_country",
        "home_country", "birth_country", "country_of_birth",
        "billing_country", "billingcountry", "shipping_country", "shippingcountry",
        "delivery_country", "deliverycountry", "mailing_country", "mailingcountry",
        "passport_country", "issuing_country", "tax_country",
        "residence_country", "current_country", "permanent_country",
        "secondary_country", "alt_country", "destination_country",
        "from_country", "to_country", "operating_country",
    ]),
    Rule::keywords(Category::CountryCode, &[
        "country_code", "countrycode", "country_iso", "iso_code",
        "iso_country", "nation_code", "nationcode", "alpha2", "alpha3",
        "calling_code", "callingcode", "phone_code", "phonecode",
        "isd_code", "isdcode", "dialing_code", "dialingcode",
    ]),
    Rule::keywords(Category::Landmark, &[
        "landmark", "near", "direction", "area_landmark", "nearby",
        "nearest_landmark", "area_near", "near_landmark",
    ]),
    Rule::keywords(Category::Latitude, &[
        "lat", "latitude", "geo_lat", "gps_lat", "location_lat",
        "coords_lat", "coord_lat", "position_lat", "y_coord",
    ]),
    Rule::keywords(Category::Longitude, &[
        "long", "longitude", "lng", "geo_long", "geo_lng", "gps_long",
        "gps_lng", "location_long", "location_lng", "coords_long", "coords_lng",
        "coord_long", "coord_lng", "position_long", "position_lng", "x_coord",
    ]),
    Rule::keywords(Category::TimeZone, &["timezone", "time_zone", "tz", "utc_offset", "local_timezone"]),
    Rule::keywords(Category::BuildingComplex, &[
        "building", "building_name", "buildingname", "complex", "campus",
        "society", "colony", "locality_name", "area_name", "neighborhood",
        "neighbourhood", "nagar", "enclave", "estate",
    ]),

    // ---- Financial & banking ----
    Rule::keywords(Category::CardNumber, &[
        "cardnumber", "card_number", "creditcard", "cc_num",
        "credit_card_number", "creditcardnumber", "debit_card_number",
        "debitcardnumber", "card_no", "cardno", "card_num", "cardnum",
        "cc_number", "ccnumber", "cc_no", "ccno", "visa", "mastercard",
        "amex", "discover", "card_field", "cardfield", "payment_card",
        "paymentcard", "pan_number", "account_card", "card_account",
        "card_id", "cardid", "card_code", "cardcode",
    ]),
    Rule::keywords(Category::CardCvv, &[
        "cvv", "cvc", "security_code", "securitycode", "cvv2", "cvc2",
        "csv", "card_verification", "cvn", "card_security_code",
        "cardsecuritycode", "card_validation_code", "cid", "ccv",
        "verification_number", "card_pin", "card_verification_value",
    ]),
    Rule::keywords(Category::CardExpiry, &[
        "expiry", "exp_date", "valid_thru", "expiry_date", "expirydate",
        "expiration", "expiration_date", "expirationdate", "exp_month",
        "exp_year", "card_expiry", "cardexpiry", "card_expiration",
        "cardexpiration", "card_exp", "cardexp", "valid_through",
        "valid_until", "valid_till", "expire", "expires", "expiry_field",
        "mm_yy", "mmyy", "mm_yyyy", "mmyyyy", "card_valid",
    ]),
    Rule::keywords(Category::BankCode, &[
        "ifsc", "swift", "bic", "bank_code", "ifsc_code", "ifsccode",
        "swift_code", "swiftcode", "bic_code", "biccode", "bank_id",
        "bank_identifier", "sort_code", "sortcode", "clearing_code",
        "clearingcode", "bank_branch_code", "branch_code", "branchcode",
        "neft_code", "rtgs_code", "imps_code", "bank_ifsc", "branch_ifsc",
        "ifsc_num", "ifsc_no", "ifsc_field",
    ]),
    Rule::keywords(Category::MicrCode, &[
        "micr", "micr_code", "micrcode", "magnetic_ink", "micr_number",
        "micr_no", "micr_num", "micr_field", "micr_digit", "bank_micr",
        "branch_micr", "micr_code_field", "micr_input",
    ]),
    Rule::keywords(Category::AccountNumber, &[
        "accountnumber", "acc_no", "bank_acc", "account_number", "accountno",
        "account_no", "acc_num", "bank_account", "bankaccount",
        "bank_account_number", "bankaccountnumber", "savings_account",
        "checking_account", "current_account", "acc_number", "accnumber",
        "account_num", "account_id", "accountid", "bank_no", "bankno",
        "debit_account", "credit_account", "payment_account",
        "deposit_account", "withdrawal_account", "linked_account",
    ]),
    Rule::keywords(Category::RoutingNumber, &[
        "routing", "aba", "transit", "routing_number", "routingnumber",
        "aba_number", "abanumber", "routing_no", "routingno",
        "bank_routing", "bankrouting", "ach_routing", "achrouting",
        "wire_routing", "wirerouting",
    ]),
    Rule::keywords(Category::Iban, &["iban", "iban_number", "ibannumber", "international_bank_account"]),
    Rule::keywords(Category::TaxId, &[
        "pan", "pannumber", "income_tax_id", "pan_number", "pan_no",
        "pan_card", "pancard", "tax_id", "taxid", "tin",
        "tax_identification", "tax_identification_number", "taxpayer_id",
        "taxpayerid", "vat_number", "vatnumber", "vat_id", "vatid",
        "ein", "employer_id", "employerid", "employer_identification",
    ]),
    Rule::keywords(Category::Gstin, &[
        "gst", "gstin", "gst_number", "gstnumber", "gst_no", "gstno",
        "gstin_number", "gstinnumber", "goods_services_tax",
        "service_tax_no", "sgst", "cgst", "igst",
    ]),
    Rule::keywords(Category::MonetaryAmount, &[
        "amount", "price", "cost", "fee", "budget", "salary", "income",
        "wage", "total", "subtotal", "grand_total", "grandtotal",
        "total_amount", "totalamount", "payment_amount", "paymentamount",
        "invoice_amount", "invoiceamount", "bill_amount", "billamount",
        "due_amount", "dueamount", "outstanding", "balance", "balance_due",
        "loan_amount", "loanamount", "principal", "interest", "emi",
        "installment", "installment_amount", "monthly_payment",
        "annual_salary", "monthly_salary", "basic_salary", "gross_salary",
        "net_salary", "ctc", "compensation", "pay", "payroll",
        "remuneration", "earnings", "revenue", "profit", "loss",
        "expenditure", "expense", "expenses", "spend", "spending",
        "charge", "charges", "rate", "tariff", "premium", "deposit",
        "down_payment", "downpayment", "advance", "refund", "cashback",
        "discount_amount", "offer_price", "selling_price", "mrp",
        "base_price", "unit_price", "list_price", "retail_price",
        "wholesale_price", "market_price", "valuation", "value",
        "net_worth", "asset_value", "investment_amount", "fund_amount",
    ]),
    Rule::keywords(Category::CurrencyCode, &[
        "currency", "money", "currency_code", "currencycode",
        "currency_type", "currencytype", "payment_currency",
        "transaction_currency", "base_currency", "local_currency",
        "foreign_currency", "preferred_currency",
    ]),
    Rule::keywords(Category::TaxRate, &[
        "tax", "tax_rate", "taxrate", "tax_percent", "taxpercent",
        "vat_rate", "vatrate", "gst_rate", "gstrate", "sales_tax",
        "income_tax", "tax_amount", "tax_value",
    ]),
    Rule::keywords(Category::PromoCode, &[
        "discount", "discount_rate", "discountrate", "discount_percent",
        "discountpercent", "promo_code", "promocode", "coupon", "coupon_code",
        "couponcode", "voucher", "voucher_code", "vouchercode", "offer_code",
        "offercode", "referral_code", "referralcode", "affiliate_code",
        "affiliatecode", "promo", "deal_code",
    ]),
    Rule::keywords(Category::ReferenceNumber, &[
        "invoice_number", "invoicenumber", "invoice_no", "invoiceno",
        "invoice_id", "invoiceid", "bill_number", "billnumber",
        "bill_no", "billno", "receipt_number", "receiptnumber",
        "receipt_no", "receiptno", "receipt_id", "receiptid",
        "order_number", "ordernumber", "order_no", "orderno",
        "order_id", "orderid", "transaction_id", "transactionid",
        "txn_id", "txnid", "payment_id", "paymentid", "ref_number",
        "reference_number", "referencenumber", "ref_no", "refno",
        "booking_number", "bookingnumber", "booking_id", "bookingid",
        "ticket_number", "ticketnumber", "ticket_id", "ticketid",
        "case_number", "casenumber", "case_id", "caseid",
        "application_number", "applicationnumber", "application_id",
        "applicationid", "tracking_number", "trackingnumber", "tracking_id",
        "trackingid", "shipment_id", "shipmentid", "parcel_id", "parcelid",
    ]),
    Rule::keywords(Category::BankName, &[
        "bank_name", "bankname", "bank", "financial_institution",
        "bank_branch", "bankbranch", "branch_name", "branchname",
        "branch", "branch_location", "home_branch",
    ]),
    Rule::keywords(Category::UpiId, &[
        "upi", "upi_id", "upiid", "upi_address", "vpa", "virtual_payment",
        "gpay", "paytm", "phonepe", "payment_handle",
    ]),
    Rule::keywords(Category::CryptoWallet, &[
        "crypto_address", "wallet_address", "bitcoin_address", "eth_address",
        "btc_address", "crypto_wallet", "blockchain_address",
    ]),

    // ---- E-commerce & logistics ----
    Rule::keywords(Category::ProductCode, &[
        "sku", "product_id", "barcode", "ean", "upc", "sku_code",
        "skucode", "item_code", "itemcode", "item_id", "itemid",
        "product_code", "productcode", "model_number", "modelnumber",
        "model_no", "modelno", "catalog_number", "catalognumber",
        "catalog_id", "catalogid", "part_number", "partnumber",
        "part_no", "partno", "asin", "isbn", "issn", "serial_number",
        "serialnumber", "serial_no", "serialno", "gtin", "mpn",
        "manufacturer_part_number", "vendor_sku", "seller_sku",
    ]),
    Rule::keywords(Category::ProductName, &[
        "product", "item_name", "model", "product_name", "productname",
        "item", "merchandise", "goods", "article", "listing_title",
        "listing_name", "product_title", "producttitle", "item_title",
        "search_term", "keyword", "query_term",
    ]),
    Rule::keywords(Category::ProductCategory, &[
        "category", "dept", "department", "product_category", "productcategory",
        "item_category", "itemcategory", "product_type", "producttype",
        "item_type", "itemtype", "classification", "segment", "vertical",
        "genre", "section", "aisle", "catalog_category",
    ]),
    Rule::keywords(Category::Quantity, &[
        "qty", "quantity", "stock", "inventory", "count", "number_of_items",
        "item_count", "itemcount", "units", "pieces", "pcs",
        "number_of_units", "num_units", "num_items", "num_pieces",
        "total_units", "order_qty", "orderqty", "purchase_qty",
        "cart_qty", "min_qty", "max_qty", "available_qty",
        "in_stock", "instock", "stock_qty", "stockqty",
    ]),
    Rule::keywords(Category::Weight, &[
        "weight", "mass", "product_weight", "item_weight", "net_weight",
        "gross_weight", "shipping_weight", "package_weight", "parcel_weight",
        "weight_kg", "weight_lbs", "weight_grams",
    ]),
    Rule::keywords(Category::Vin, &[
        "vinnumber", "vin", "chassis", "chassis_number", "chassisnumber",
        "vehicle_id", "vehicleid", "vehicle_number", "vehiclenumber",
        "reg_number", "registration_number", "registrationnumber",
        "license_plate", "licenseplate", "plate_number", "platenumber",
        "numberplate", "number_plate",
    ]),
    Rule::keywords(Category::VehicleMake, &["vehicle_make", "car_make", "manufacturer"]),
    Rule::keywords(Category::VehicleModel, &["vehicle_model", "car_model"]),
    Rule::keywords(Category::VehicleType, &["vehicle_type", "car_type", "vehicle_category"]),
    Rule::keywords(Category::VehicleColor, &["vehicle_color", "car_color", "vehicle_colour", "car_colour"]),
    Rule::keywords(Category::FuelType, &["vehicle_fuel", "fuel_type", "fueltype", "fuel"]),
    Rule::keywords(Category::Dimensions, &["dimensions", "size", "measurements", "product_size"]),
    Rule::keywords(Category::HexColor, &[
        "color", "colour", "hex", "color_code", "colorcode", "hex_code",
        "hexcode", "html_color", "css_color", "primary_color", "accent_color",
        "background_color", "text_color", "foreground_color",
    ]),
    Rule::keywords(Category::Material, &["material", "fabric", "textile", "product_material"]),
    Rule::keywords(Category::ItemCondition, &["condition", "item_condition", "product_condition"]),
    Rule::keywords(Category::TrackingNumber, &[
        "tracking_number", "trackingnumber", "tracking_id", "trackingid",
        "shipment_tracking", "courier_tracking",
    ]),
    Rule::keywords(Category::Courier, &[
        "courier", "courier_name", "courier_service", "shipping_service",
        "delivery_service", "logistic", "logistics_provider", "carrier",
        "shipping_carrier", "delivery_carrier",
    ]),
    Rule::keywords(Category::DeliveryDate, DELIVERY_DATE_KEYWORDS),
    Rule::keywords(Category::ReturnPolicy, &[
        "return_policy", "returnpolicy", "return_window", "warranty",
        "warranty_period", "guarantee",
    ]),

    // ---- Professional & education ----
    Rule::keywords(Category::Company, &[
        "company", "organization", "org", "employer", "firm",
        "company_name", "companyname", "organization_name", "organizationname",
        "org_name", "orgname", "employer_name", "employername",
        "firm_name", "firmname", "business_name", "businessname",
        "enterprise", "enterprise_name", "corporation", "corp",
        "institution", "institute", "agency", "agency_name", "agencyname",
        "client_company", "vendor_company", "partner_company",
        "current_company", "previous_company", "former_employer",
        "current_employer", "last_employer", "startup_name",
        "brand", "brand_name", "brandname", "trade_name", "tradename",
        "dba", "doing_business_as", "company_legal_name",
    ]),
    Rule::keywords(Category::JobTitle, &[
        "jobtitle", "designation", "role", "position", "job_title",
        "job_role", "jobrole", "job_position", "jobposition",
        "employment_title", "work_title", "worktitle", "career_title",
        "professional_title", "current_role", "current_position",
        "current_designation", "applied_position", "applied_for",
        "post", "post_applied", "vacancy", "job_profile", "jobprofile",
        "staff_designation", "employee_designation", "title_of_job",
        "role_name", "rolename", "position_name", "positionname",
    ]),
    Rule::keywords(Category::YearsOfExperience, &[
        "experience", "exp", "years_of_work", "work_experience",
        "workexperience", "years_of_experience", "yearsofexperience",
        "total_experience", "totalexperience", "relevant_experience",
        "professional_experience", "industry_experience", "domain_experience",
        "yoe", "years_exp", "exp_years", "total_exp", "experience_years",
    ]),
    Rule::keywords(Category::School, &[
        "school", "college", "university", "insti", "institution",
        "school_name", "schoolname", "college_name", "collegename",
        "university_name", "universityname", "institution_name",
        "institutionname", "alma_mater", "almamater", "attended",
        "graduate_from", "graduated_from", "studied_at", "education_institute",
        "academic_institution", "polytechnic", "iit", "nit", "deemed",
        "current_school", "previous_school", "high_school", "highschool",
        "middle_school", "elementary_school", "primary_school",
    ]),
    Rule::keywords(Category::Degree, &[
        "degree", "qualification", "educational_qualification", "academic_qualification",
        "highest_qualification", "education_level", "academic_level",
        "educational_level", "course", "course_name", "coursename",
        "program", "program_name", "programname", "major", "major_subject",
        "specialization", "stream", "branch", "study_field",
        "field_of_study", "area_of_study", "concentration",
        "certification", "certificate", "diploma", "masters", "bachelors",
        "phd", "doctorate",
    ]),
    Rule::keywords(Category::Gpa, &[
        "gpa", "cgpa", "marks", "grade", "percentage", "score",
        "academic_score", "test_score", "exam_score", "result",
        "aggregate", "aggregate_marks", "total_marks", "marks_obtained",
        "semester_gpa", "cumulative_gpa", "academic_percentage",
        "grade_point", "gradepoint", "academic_grade",
    ]),
    Rule::keywords(Category::Skills, &[
        "skills", "skill_set", "skillset", "technical_skills", "soft_skills",
        "core_competencies", "competencies", "expertise", "proficiencies",
        "abilities", "capabilities", "key_skills", "primary_skills",
        "secondary_skills", "languages_known", "tools", "technologies",
    ]),
    Rule::keywords(Category::Certifications, &[
        "certifications", "certificates", "credential", "credentials",
        "license", "licensed", "accreditation", "certification_name",
        "cert", "certs",
    ]),
    Rule::keywords(Category::Projects, &[
        "projects", "project_name", "projectname", "work_project",
        "academic_project", "portfolio_project",
    ]),
    Rule::keywords(Category::Achievements, &[
        "achievements", "accomplishments", "awards", "honors", "honours",
        "accolades", "recognition", "distinctions",
    ]),
    Rule::keywords(Category::Hobbies, &[
        "hobby", "hobbies", "interests", "extracurricular", "extra_curricular",
        "passion", "leisure", "activities",
    ]),
    Rule::keywords(Category::CareerObjective, &[
        "objective", "career_objective", "careerobjective", "job_objective",
        "professional_objective", "goal", "career_goal", "career_summary",
        "careersummary", "professional_summary", "professionalsummary",
        "profile_summary", "executive_summary",
    ]),
    Rule::keywords(Category::LinkedinProfile, &[
        "linkedin", "linkedin_url", "linkedin_profile", "linkedin_id",
        "linkedin_username", "linkedin_handle",
    ]),
    Rule::keywords(Category::Team, &[
        "department_name", "dept_name", "deptname", "team", "team_name",
        "teamname", "division_name", "divisionname", "unit_name", "unitname",
    ]),
    Rule::keywords(Category::EmployeeId, &[
        "employee_id", "employeeid", "employee_no", "employeeno", "emp_id",
        "empid", "staff_id", "staffid", "worker_id", "workerid",
        "person_id", "personid", "hr_id", "hrid",
    ]),
    Rule::keywords(Category::JoiningDate, JOINING_DATE_KEYWORDS),
    Rule::keywords(Category::LeavingDate, &[
        "leaving_date", "leavingdate", "end_date", "enddate",
        "exit_date", "exitdate", "termination_date", "last_date",
        "resignation_date", "employment_end",
    ]),
    Rule::keywords(Category::NoticePeriod, &[
        "notice_period", "noticeperiod", "notice", "availability",
        "available_from", "joining_time",
    ]),
    Rule::keywords(Category::WorkMode, &[
        "work_mode", "workmode", "work_type", "employment_type",
        "employmenttype", "job_type", "jobtype", "contract_type",
    ]),
    Rule::keywords(Category::Industry, &[
        "industry", "industry_type", "sector", "business_sector",
        "industry_name", "field", "domain", "vertical_name",
    ]),

    // ---- Digital assets ----
    Rule::keywords(Category::Ipv4, &[
        "ip", "ipaddress", "ipv4", "ip_address", "ip_addr",
        "client_ip", "server_ip", "remote_ip", "local_ip",
        "source_ip", "dest_ip", "destination_ip", "origin_ip",
        "host_ip", "public_ip", "private_ip", "static_ip",
    ]),
    Rule::keywords(Category::Ipv6, &["ipv6", "ip_v6", "ipv6_address", "ipv6_addr"]),
    Rule::keywords(Category::MacAddress, &[
        "mac", "macaddress", "mac_address", "mac_addr",
        "hardware_address", "physical_address", "network_address",
        "ethernet_address", "device_mac", "wifi_mac",
    ]),
    Rule::keywords(Category::Uuid, &[
        "uuid", "guid", "ref_id", "unique_id", "uniqueid",
        "global_id", "globalid", "system_id", "systemid",
        "correlation_id", "correlationid", "session_id", "sessionid",
        "request_id", "requestid", "trace_id", "traceid", "span_id",
        "spanid", "entity_id", "entityid", "record_id", "recordid",
        "document_id", "documentid", "object_id", "objectid",
        "resource_id", "resourceid", "asset_id", "assetid",
        "instance_id", "instanceid", "job_id", "jobid",
        "workflow_id", "workflowid", "process_id", "processid",
        "task_id", "taskid", "event_id", "eventid",
    ]),
    Rule::keywords(Category::Slug, &[
        "slug", "permalink", "url_slug", "urlslug", "path",
        "url_path", "urlpath", "friendly_url", "seo_url",
        "canonical_url", "post_slug", "page_slug", "article_slug",
        "product_slug", "category_slug",
    ]),
    Rule::keywords(Category::UserAgent, &[
        "agent", "user_agent", "useragent", "browser", "browser_name",
        "browsername", "client_name", "clientname",
    ]),
    Rule::keywords(Category::Port, &[
        "port", "port_number", "portnumber", "network_port",
        "server_port", "service_port",
    ]),
    Rule::keywords(Category::Hostname, &[
        "hostname", "host_name", "server_name", "servername",
        "domain_name", "fqdn", "host",
    ]),
    Rule::keywords(Category::ApiEndpoint, &[
        "api_endpoint", "endpoint", "base_url", "baseurl",
        "api_url", "apiurl", "service_url", "serviceurl",
    ]),
    Rule::keywords(Category::MimeType, &[
        "mime_type", "content_type", "file_type", "filetype",
        "media_type", "mediatype", "format", "file_format",
    ]),
    Rule::keywords(Category::FileName, &[
        "file_name", "filename", "file_path", "filepath", "document_name",
        "documentname", "attachment_name", "attachmentname",
    ]),
    Rule::keywords(Category::FileSize, &["file_size", "filesize", "document_size"]),
    Rule::keywords(Category::Version, &[
        "version", "version_number", "versionnumber", "app_version",
        "software_version", "release", "build", "build_number",
    ]),
    Rule::keywords(Category::Environment, &["environment", "env", "deployment_env", "app_env"]),

    // ---- Dates & time ----
    Rule::keywords(Category::StartDate, START_DATE_KEYWORDS),
    Rule::keywords(Category::EndDate, END_DATE_KEYWORDS),
    Rule::keywords(Category::ScheduledDate, SCHEDULED_DATE_KEYWORDS),
    Rule::keywords(Category::Year, &[
        "year", "current_year", "fiscal_year", "financial_year",
        "academic_year", "graduation_year", "passing_year",
        "establishment_year", "founded_year", "incorporation_year",
    ]),
    Rule::keywords(Category::Month, &["month", "current_month", "birth_month"]),
    Rule::keywords(Category::DayOfMonth, &["day", "current_day", "birth_day", "day_of_month"]),
    Rule::keywords(Category::Duration, &[
        "duration", "duration_days", "duration_months", "duration_years",
        "length", "period", "tenure", "term", "validity_period",
        "contract_duration", "subscription_period", "course_duration",
    ]),

    // ---- Healthcare ----
    Rule::keywords(Category::PatientId, &[
        "patient_id", "patientid", "medical_record", "mr_number",
        "health_id", "healthid", "insurance_id", "insuranceid",
        "policy_number", "policynumber", "policy_no", "policyno",
        "member_number", "membernumber", "subscriber_id", "subscriberid",
    ]),
    Rule::keywords(Category::Diagnosis, &[
        "diagnosis", "condition", "medical_condition", "ailment",
        "disease", "illness", "disorder",
    ]),
    Rule::keywords(Category::Medication, &[
        "medication", "medicine", "drug", "prescription", "rx",
        "current_medication", "medications",
    ]),
    Rule::keywords(Category::Allergies, &["allergies", "allergy", "drug_allergy", "food_allergy", "known_allergies"]),
    Rule::keywords(Category::Doctor, &[
        "doctor_name", "physician_name", "physician", "doctor",
        "primary_doctor", "specialist", "consultant",
    ]),
    Rule::keywords(Category::Hospital, &[
        "hospital", "hospital_name", "clinic", "clinic_name",
        "medical_facility", "healthcare_provider", "health_center",
    ]),
    Rule::keywords(Category::InsuranceCompany, &[
        "insurance_company", "insurance_provider", "insurer",
        "health_insurer", "insurance_name",
    ]),
    Rule::keywords(Category::EmergencyContact, &[
        "emergency_contact", "emergency_name", "emergency_contact_name",
        "next_of_kin", "kin_name", "guardian_name", "guardianname",
        "nominee", "nominee_name", "nomineename",
    ]),
    Rule::keywords(Category::Relationship, &[
        "relationship", "relation", "relation_type", "relationship_to",
        "kinship", "family_relation", "relation_with_insured",
        "nominee_relation", "contact_relation",
    ]),

    // ---- Real estate ----
    Rule::keywords(Category::PropertyId, &[
        "property_id", "propertyid", "property_no", "propertyno",
        "listing_id", "listingid", "property_code", "propertycode",
        "mls_number", "mlsnumber",
    ]),
    Rule::keywords(Category::PropertyType, &[
        "property_type", "propertytype", "home_type", "hometype",
        "house_type", "housetype", "real_estate_type",
    ]),
    Rule::keywords(Category::Bedrooms, &[
        "bedrooms", "bedroom", "bhk", "bed_rooms", "no_of_bedrooms",
        "number_of_bedrooms", "beds",
    ]),
    Rule::keywords(Category::Bathrooms, &[
        "bathrooms", "bathroom", "baths", "no_of_bathrooms", "number_of_bathrooms",
    ]),
    Rule::keywords(Category::FloorArea, &[
        "area", "square_feet", "sqft", "sq_ft", "carpet_area",
        "built_up_area", "super_area", "plot_area", "land_area",
        "total_area", "floor_area",
    ]),
    Rule::keywords(Category::Rent, &[
        "rent", "monthly_rent", "rental_amount", "lease_amount",
        "rent_per_month", "rental_price",
    ]),
    Rule::keywords(Category::LeaseTerm, &["lease_term", "lease_duration", "rental_period", "tenancy_period"]),

    // ---- Travel & hospitality ----
    Rule::keywords(Category::Destination, &[
        "destination", "travel_destination", "trip_destination",
        "to_city", "arrival_city", "to_location",
    ]),
    Rule::keywords(Category::Origin, &[
        "origin", "from_city", "departure_city", "from_location",
        "source_location", "source_city",
    ]),
    Rule::keywords(Category::FlightNumber, &["flight_number", "flightnumber", "flight_no", "flightno"]),
    Rule::keywords(Category::Airline, &["airline", "airline_name", "carrier_name"]),
    Rule::keywords(Category::Seat, &["seat_number", "seat_no", "seat_num", "boarding_gate", "terminal"]),

    // ---- Tech stack ----
    Rule::keywords(Category::ProgrammingLanguage, &["programming_language", "coding_language", "main_language"]),
    Rule::keywords(Category::Ide, &["ide", "editor", "code_editor"]),
    Rule::keywords(Category::Framework, &["framework", "web_framework", "tech_stack"]),
    Rule::keywords(Category::VersionControl, &["version_control", "vcs", "git_platform"]),

    // ---- Social & content ----
    Rule::keywords(Category::ContentTitle, &[
        "title", "post_title", "article_title", "page_title",
        "blog_title", "heading", "headline", "subject",
        "email_subject", "mail_subject", "topic", "thread_title",
        "event_title", "event_name", "webinar_title", "meeting_title",
        "project_title", "task_title", "issue_title", "ticket_title",
    ]),
    Rule::keywords(Category::ContentBody, &[
        "content", "body", "message_body", "email_body", "post_content",
        "article_content", "blog_content", "description",
        "detail", "details", "additional_details", "more_details",
        "full_description", "product_description", "job_description",
        "course_description", "event_description", "item_description",
        "listing_description", "abstract", "synopsis", "overview",
    ]),
    Rule::keywords(Category::Tags, &[
        "tags", "tag", "keywords", "keyword_list", "meta_keywords",
        "search_tags", "hashtags", "label", "labels",
    ]),
    Rule::keywords(Category::Subject, &[
        "subject", "email_subject", "message_subject", "mail_subject", "subject_line",
    ]),
    Rule::keywords(Category::Rating, &[
        "rating", "review_rating", "star_rating", "score_rating",
        "product_rating", "overall_rating",
    ]),
    Rule::keywords(Category::Review, &[
        "review", "review_text", "testimonial", "user_review",
        "product_review", "customer_review", "opinion",
    ]),

    // ---- Retail & supply chain ----
    Rule::keywords(Category::WarrantyPeriod, &["warranty_period", "warranty_duration", "guarantee_period"]),
    Rule::keywords(Category::ReturnWindow, &["return_days", "return_window"]),
    Rule::keywords(Category::HsCode, &["hs_code", "hsn_code", "tax_category"]),
    Rule::keywords(Category::WarehouseBin, &["origin_warehouse", "warehouse_id", "bin_location"]),

    // ---- Large free text ----
    Rule::tagged(Category::LongText, "textarea", &[
        "bio", "about", "desc", "summary", "message", "comment", "feedback",
        "note", "notes", "remarks", "remark", "description", "details",
        "additional_info", "additionalinfo", "more_info", "moreinfo",
        "other_info", "otherinfo", "extra_info", "extrainfo",
        "cover_letter", "coverletter", "personal_statement", "personalstatement",
        "statement_of_purpose", "sop", "letter_of_intent", "motivation_letter",
        "introduction", "intro", "profile_description", "profile_bio",
        "self_description", "about_me", "aboutme", "who_i_am",
        "why_us", "why_join", "reason_for_applying", "reason_for_interest",
        "additional_comments", "special_requirements", "special_instructions",
        "delivery_instructions", "order_notes", "shipping_notes",
        "medical_notes", "clinical_notes", "doctor_notes", "prescription_notes",
        "legal_notes", "terms_notes", "compliance_notes",
        "project_description", "task_description", "issue_description",
        "bug_description", "enhancement_description", "request_description",
        "inquiry_description", "support_description",
        "incident_description", "accident_description", "claim_description",
        "justification", "explanation", "reasoning", "rationale",
        "narrative", "story", "background", "context",
        "executive_summary", "business_description", "company_overview",
        "mission", "vision", "mission_statement", "vision_statement",
        "property_description", "amenities", "room_description",
        "itinerary", "trip_description", "agenda", "plan",
        "terms", "conditions", "tnc", "disclaimer",
    ]),

    // ---- Miscellaneous ----
    Rule::keywords(Category::Language, &[
        "language", "preferred_language", "native_language", "spoken_language",
        "programming_language", "locale", "lang",
    ]),
    Rule::keywords(Category::TimeZone, &["timezone", "time_zone", "tz", "user_timezone", "local_tz"]),
    Rule::keywords(Category::Theme, &["theme", "ui_theme", "color_theme", "app_theme"]),
    Rule::keywords(Category::Font, &["font", "font_family", "fontfamily", "typography"]),
    Rule::keywords(Category::Plan, &[
        "plan", "subscription_plan", "price_plan", "billing_plan",
        "membership_plan", "account_plan", "tier",
    ]),
    Rule::keywords(Category::Status, &[
        "status", "current_status", "account_status", "order_status",
        "application_status", "project_status", "task_status", "issue_status",
        "enrollment_status", "payment_status", "verification_status",
    ]),
    Rule::keywords(Category::Priority, &[
        "priority", "task_priority", "issue_priority", "request_priority",
        "urgency", "severity",
    ]),
    Rule::keywords(Category::LeadSource, &[
        "source", "lead_source", "traffic_source", "referral_source",
        "how_did_you_hear", "heard_from", "referred_by",
    ]),
    Rule::keywords(Category::Device, &[
        "device", "device_type", "device_name", "platform",
        "operating_system", "os", "system",
    ]),
    Rule::keywords(Category::Reason, &[
        "reason", "purpose", "intention", "objective_field",
        "cancellation_reason", "refund_reason", "return_reason",
        "dispute_reason", "complaint_reason", "leave_reason",
    ]),
    Rule::keywords(Category::ActivationCode, &[
        "code", "activation_code", "activation_key", "license_key",
        "serial_key", "product_key", "productkey", "registration_code",
        "invite_code", "invitation_code", "referral",
    ]),
    Rule::keywords(Category::Question, &[
        "question", "faq_question", "support_question", "inquiry",
        "enquiry", "query", "help_question",
    ]),
    Rule::keywords(Category::Answer, &[
        "answer", "faq_answer", "support_answer", "response_text",
        "reply_text", "solution",
    ]),
    Rule::keywords(Category::TemplateName, &["template", "template_name", "template_title"]),
    Rule::keywords(Category::Campaign, &["campaign", "campaign_name", "ad_campaign", "marketing_campaign"]),
    Rule::keywords(Category::DisplayLabel, &["label", "display_label", "field_label", "tag_name"]),
    Rule::keywords(Category::Rank, &["rank", "ranking", "position_rank", "order"]),
    Rule::keywords(Category::MaxValue, &["max", "maximum", "max_value", "upper_limit", "cap"]),
    Rule::keywords(Category::MinValue, &["min", "minimum", "min_value", "lower_limit", "floor"]),
    Rule::keywords(Category::Percentage, &["percentage", "percent", "pct", "rate", "ratio"]),
    Rule::keywords(Category::Capacity, &[
        "seats", "capacity", "max_capacity", "total_seats", "num_seats",
        "available_seats", "participants", "attendees",
    ]),
    Rule::keywords(Category::Coordinates, &["longitude_degrees", "latitude_degrees", "coordinates"]),
    Rule::keywords(Category::SortOrder, &[
        "sort", "sort_order", "sort_by", "order_by", "display_order",
        "menu_order", "sequence", "sequence_number", "position_order",
    ]),
];
