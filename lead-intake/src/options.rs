//! Static options for the city and dial code selectors
//!
//! Read-only; submitted values are not checked against these lists.

use serde::Serialize;

use crate::rules::OUTSIDE_HOME_COUNTRY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CityOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DialCode {
    pub name: &'static str,
    pub dial_code: &'static str,
    pub iso: &'static str,
}

const CITIES: &[CityOption] = &[
    CityOption { value: "riyadh", label: "الرياض" },
    CityOption { value: "jeddah", label: "جدة" },
    CityOption { value: "makkah", label: "مكة المكرمة" },
    CityOption { value: "madinah", label: "المدينة المنورة" },
    CityOption { value: "dammam", label: "الدمام" },
    CityOption { value: "khobar", label: "الخبر" },
    CityOption { value: "dhahran", label: "الظهران" },
    CityOption { value: "taif", label: "الطائف" },
    CityOption { value: "tabuk", label: "تبوك" },
    CityOption { value: "buraidah", label: "بريدة" },
    CityOption { value: "abha", label: "أبها" },
    CityOption { value: "khamis_mushait", label: "خميس مشيط" },
    CityOption { value: "hail", label: "حائل" },
    CityOption { value: "jazan", label: "جازان" },
    CityOption { value: "najran", label: "نجران" },
    CityOption { value: "al_ahsa", label: "الأحساء" },
    CityOption { value: "jubail", label: "الجبيل" },
    CityOption { value: "yanbu", label: "ينبع" },
    CityOption { value: OUTSIDE_HOME_COUNTRY, label: "خارج السعودية" },
];

const DIAL_CODES: &[DialCode] = &[
    DialCode { name: "Saudi Arabia", dial_code: "+966", iso: "SA" },
    DialCode { name: "United Arab Emirates", dial_code: "+971", iso: "AE" },
    DialCode { name: "Kuwait", dial_code: "+965", iso: "KW" },
    DialCode { name: "Qatar", dial_code: "+974", iso: "QA" },
    DialCode { name: "Bahrain", dial_code: "+973", iso: "BH" },
    DialCode { name: "Oman", dial_code: "+968", iso: "OM" },
    DialCode { name: "Egypt", dial_code: "+20", iso: "EG" },
    DialCode { name: "Jordan", dial_code: "+962", iso: "JO" },
    DialCode { name: "Lebanon", dial_code: "+961", iso: "LB" },
    DialCode { name: "Iraq", dial_code: "+964", iso: "IQ" },
    DialCode { name: "Syria", dial_code: "+963", iso: "SY" },
    DialCode { name: "Yemen", dial_code: "+967", iso: "YE" },
    DialCode { name: "Morocco", dial_code: "+212", iso: "MA" },
    DialCode { name: "Algeria", dial_code: "+213", iso: "DZ" },
    DialCode { name: "Tunisia", dial_code: "+216", iso: "TN" },
    DialCode { name: "Sudan", dial_code: "+249", iso: "SD" },
    DialCode { name: "Turkey", dial_code: "+90", iso: "TR" },
    DialCode { name: "United Kingdom", dial_code: "+44", iso: "GB" },
    DialCode { name: "United States", dial_code: "+1", iso: "US" },
];

pub fn cities() -> &'static [CityOption] {
    CITIES
}

pub fn dial_codes() -> &'static [DialCode] {
    DIAL_CODES
}
