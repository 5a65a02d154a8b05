//! Unit table - every category and unit the converter knows about
//!
//! Declaration order matters: categories are listed in the order they are
//! registered, and the first two units of each category form its default
//! from/to pair.

use std::f64::consts::{LOG10_E, PI};
use crate::{Category, Unit, UnitRegistry};
use crate::temperature;

const INCH: f64 = 0.0254;
const FOOT: f64 = 0.3048;
const YARD: f64 = 0.9144;
const OUNCE: f64 = 0.0283495;
const POUND: f64 = OUNCE * 16.0;
const DAY: f64 = 86400.0;
const ASTRONOMICAL_UNIT: f64 = 149597870700.0;

// Volumes are in liters; a cubic inch is (0.254 dm)^3
const CUBIC_INCH: f64 = 0.254 * 0.254 * 0.254;
const US_GALLON: f64 = CUBIC_INCH * 231.0;
const UK_GALLON: f64 = US_GALLON * 1.20095;
const US_DRY_BARREL: f64 = CUBIC_INCH * 7056.0;

impl UnitRegistry {
    pub(crate) fn register_all_categories(&mut self) {
        self.register_length_units();
        self.register_weight_units();
        self.register_temperature_units();
        self.register_volume_units();
        self.register_time_units();
        self.register_energy_units();
        self.register_angle_units();
        self.register_area_units();
        self.register_data_units();
        self.register_density_units();
        self.register_force_units();
        self.register_units_units();
        self.register_speed_units();
        self.register_power_units();
        self.register_pressure_units();
        self.register_frequency_units();
        self.register_sound_units();
        self.register_illuminance_units();
    }

    fn register_length_units(&mut self) {
        let mut c = Category::linear("length", "Length");
        c.add(Unit::new("meter", "Meter", 1.0, "m"));
        c.add(Unit::new("kilometer", "Kilometer", 1000.0, "km"));
        c.add(Unit::new("centimeter", "Centimeter", 0.01, "cm"));
        c.add(Unit::new("millimeter", "Millimeter", 0.001, "mm"));
        c.add(Unit::new("micron", "Micrometer/Micron", 1e-6, "μm"));
        c.add(Unit::new("nanometer", "Nanometer", 1e-9, "nm"));
        c.add(Unit::new("picometer", "Picometer", 1e-12, "pm"));
        c.add(Unit::new("angstrom", "Angstrom", 1e-10, "Å"));
        c.add(Unit::new("mil", "Mil", 0.0254e-3, "mil"));
        c.add(Unit::new("twip", "Twip", INCH / 1440.0, "twip"));
        c.add(Unit::new("point", "Point", INCH / 72.0, "pt"));
        c.add(Unit::new("poppyseed", "Poppyseed", INCH / 15.0, "pseed"));
        c.add(Unit::new("line", "Line", INCH / 12.0, "lin"));
        c.add(Unit::new("barleycorn", "Barleycorn", INCH / 3.0, "bcorn"));
        c.add(Unit::new("digit", "Digit", INCH * 0.75, "dig"));
        c.add(Unit::new("finger", "Finger", INCH * 0.875, "fin"));
        c.add(Unit::new("inch", "Inch", INCH, "in"));
        c.add(Unit::new("nail", "Nail", YARD / 16.0, "nl"));
        c.add(Unit::new("palm", "Palm", 0.0762, "pm"));
        c.add(Unit::new("hand", "Hand", 0.1016, "hh"));
        c.add(Unit::new("shaftment", "Shaftment", 0.1524, "smt"));
        c.add(Unit::new("span", "Span", 0.2286, "spn"));
        c.add(Unit::new("foot", "Foot", FOOT, "ft"));
        c.add(Unit::new("horse", "Horse Length", 2.4384, "hl"));
        c.add(Unit::new("cubit", "Cubit", 0.4572, "cbt"));
        c.add(Unit::new("yard", "Yard", YARD, "yd"));
        c.add(Unit::new("ell", "Ell", YARD * 1.25, "ell"));
        c.add(Unit::new("skein", "Skein", YARD * 120.0, "skn"));
        c.add(Unit::new("hank", "Hank", YARD * 720.0, "hnk"));
        c.add(Unit::new("spindle", "Spindle", YARD * 14400.0, "spdl"));
        c.add(Unit::new("chain", "Chain", YARD * 22.0, "ch"));
        c.add(Unit::new("link", "Link", YARD * 0.22, "lnk"));
        c.add(Unit::new("rod", "Rod", YARD * 5.5, "rod"));
        c.add(Unit::new("furlong", "Furlong", YARD * 220.0, "fur"));
        c.add(Unit::new("mile", "Mile", YARD * 1760.0, "mi"));
        c.add(Unit::new("league", "League", YARD * 5280.0, "lea"));
        c.add(Unit::new("fathom", "Fathom", 1.852, "ftm"));
        c.add(Unit::new("cable", "Cable", 185.2, "cbl"));
        c.add(Unit::new("naut_mile", "Nautical Mile", 1852.0, "nmi"));
        c.add(Unit::new("astrounit", "Astronomical Unit", ASTRONOMICAL_UNIT, "AU"));
        c.add(Unit::new("parsec", "Parsec", ASTRONOMICAL_UNIT * 180.0 * 60.0 * 60.0 / PI, "AU"));
        c.add(Unit::new("light_year", "Light Year", 299792458.0 * 60.0 * 60.0 * 24.0 * 365.2425, "ly"));
        c.add(Unit::new("gaj", "Gaj", YARD, "gaj"));
        c.add(Unit::new("kos", "Kos", YARD * 1760.0 * 2.25, "kos"));
        c.add(Unit::new("yojan", "Yojan", YARD * 1760.0 * 9.0, "yojan"));
        self.register(c);
    }

    fn register_weight_units(&mut self) {
        let mut c = Category::linear("weight", "Weight");
        c.add(Unit::new("kilogram", "Kilogram", 1.0, "kg"));
        c.add(Unit::new("gram", "Gram", 0.001, "g"));
        c.add(Unit::new("milligram", "Milligram", 1e-6, "mg"));
        c.add(Unit::new("microgram", "Microgram", 1e-9, "μg"));
        c.add(Unit::new("quintal", "Quintal", 100.0, "qui"));
        c.add(Unit::new("tonne", "Tonne", 1000.0, "t"));
        c.add(Unit::new("grain", "Grain", OUNCE / 437.5, "grn"));
        c.add(Unit::new("pennyweight", "Pennyweight", 0.024, "dwt"));
        c.add(Unit::new("troy_ounce", "Troy Ounce", 0.48, "ozt"));
        c.add(Unit::new("troy_pound", "Troy Pound", 5.76, "lbt"));
        c.add(Unit::new("dram", "Dram", OUNCE / 16.0, "dr"));
        c.add(Unit::new("ounce", "Ounce", OUNCE, "oz"));
        c.add(Unit::new("pound", "Pound", POUND, "lb"));
        c.add(Unit::new("stone", "Stone", POUND * 14.0, "st"));
        c.add(Unit::new("quarter", "Quarter", POUND * 28.0, "qtr"));
        c.add(Unit::new("short_hundredweight", "Short Hundredweight", POUND * 100.0, "scwt"));
        c.add(Unit::new("short_ton", "Short Ton", POUND * 2000.0, "ston"));
        c.add(Unit::new("long_hundredweight", "Long Hundredweight", POUND * 112.0, "lcwt"));
        c.add(Unit::new("long_ton", "Long Ton", POUND * 2240.0, "lton"));

        // Indian units
        c.add(Unit::new("tola", "Tola", 0.01, "tola"));
        c.add(Unit::new("masha", "Masha", 0.01 / 12.0, "masha"));
        c.add(Unit::new("ratti", "Ratti", 0.01 / 96.0, "ratti"));
        c.add(Unit::new("seer", "Seer", 0.8, "seer"));
        c.add(Unit::new("maund", "Maund", 32.0, "maund"));
        self.register(c);
    }

    fn register_temperature_units(&mut self) {
        let mut c = Category::with_policy("temperature", "Temperature", temperature::policy());
        // Factors are placeholders; conversion goes through the celsius pivot
        c.add(Unit::new("celsius", "Celsius", 1.0, "°C"));
        c.add(Unit::new("fahrenheit", "Fahrenheit", 1.0, "°F"));
        c.add(Unit::new("kelvin", "Kelvin", 1.0, "K"));
        c.add(Unit::new("rankine", "Rankine", 1.0, "°Ra"));
        c.add(Unit::new("romer", "Romer", 1.0, "°Ro"));
        c.add(Unit::new("newton", "Newton", 1.0, "°N"));
        c.add(Unit::new("delisle", "Delisle", 1.0, "°D"));
        c.add(Unit::new("reaumur", "Reaumur", 1.0, "°Re"));
        self.register(c);
    }

    fn register_volume_units(&mut self) {
        let mut c = Category::linear("volume", "Volume");
        c.add(Unit::new("liter", "Liter", 1.0, "L"));
        c.add(Unit::new("milliliter", "Milliliter/Cubic Centimeter", 0.001, "mL,cc,cu. cm"));
        c.add(Unit::new("cubic_meter", "Cubic Meter", 1000.0, "cu. m"));
        c.add(Unit::new("cubic_inch", "Cubic Inch", CUBIC_INCH, "cu. in"));
        c.add(Unit::new("cubic_foot", "Cubic Foot", 3.048_f64.powf(3.0), "cu. ft"));
        c.add(Unit::new("cubic_yard", "Cubic Yard", 9.144_f64.powi(3), "cu. yd"));
        c.add(Unit::new("acre_foot", "Acre Foot", 3.048_f64.powf(3.0) * 43560.0, "acre ft"));
        c.add(Unit::new("mole_gas", "Mole (Gas)", 22.4, "mole"));

        // Imperial fluid measures
        c.add(Unit::new("gallon_uk", "Gallon (UK)", UK_GALLON, "gal (UK)"));
        c.add(Unit::new("barrel_uk", "Barrel (UK)", UK_GALLON * 31.5, "bbl (UK)"));
        c.add(Unit::new("hogshead_uk", "Hogshead (UK)", UK_GALLON * 63.0, "hog (UK)"));
        c.add(Unit::new("pottle_uk", "Pottle (UK)", UK_GALLON / 2.0, "pot (UK)"));
        c.add(Unit::new("quart_uk", "Quart (UK)", UK_GALLON / 4.0, "qt (UK)"));
        c.add(Unit::new("pint_uk", "Pint (UK)", UK_GALLON / 8.0, "pt (UK)"));
        c.add(Unit::new("cup_uk", "Cup (UK)", UK_GALLON / 16.0, "c (UK)"));
        c.add(Unit::new("gill_uk", "Gill (UK)", UK_GALLON / 32.0, "gi (UK)"));
        c.add(Unit::new("jack_uk", "Jack (UK)", UK_GALLON / 64.0, "jack (UK)"));
        c.add(Unit::new("jig_shot_uk", "Jig/Shot (UK)", UK_GALLON * 1.5 / 128.0, "jig (UK)"));
        c.add(Unit::new("fluid_ounce_uk", "Fluid Ounce (UK)", UK_GALLON / 128.0, "fl. oz (UK)"));
        c.add(Unit::new("tablespoon_uk", "Tablespoon (UK)", UK_GALLON / 256.0, "tbsp (UK)"));
        c.add(Unit::new("teaspoon_uk", "Teaspoon (UK)", UK_GALLON / 768.0, "tsp (UK)"));
        c.add(Unit::new("fluid_dram_uk", "Fluid Dram (UK)", UK_GALLON / 1024.0, "fl. dr (UK)"));
        c.add(Unit::new("minim_uk", "Minim (UK)", UK_GALLON / (1024.0 * 60.0), "min (UK)"));

        // US customary fluid measures
        c.add(Unit::new("fluid_gallon_us", "Fluid Gallon (US)", US_GALLON, "fl. gal (US)"));
        c.add(Unit::new("fluid_barrel_us", "Fluid Barrel (US)", US_GALLON * 31.5, "fl. bbl (US)"));
        c.add(Unit::new("oil_barrel_us", "Oil Barrel (US)", US_GALLON * 42.0, "oil bbl (US)"));
        c.add(Unit::new("fluid_hogshead_us", "Fluid Hogshead (US)", US_GALLON * 63.0, "fl. hog (US)"));
        c.add(Unit::new("fluid_pottle_us", "Fluid Pottle (US)", US_GALLON / 2.0, "fl. pot (US)"));
        c.add(Unit::new("fluid_quart_us", "Fluid Quart (US)", US_GALLON / 4.0, "fl. qt (US)"));
        c.add(Unit::new("fluid_pint_us", "Fluid Pint (US)", US_GALLON / 8.0, "fl. pt (US)"));
        c.add(Unit::new("fluid_cup_us", "Fluid Cup (US)", US_GALLON / 16.0, "fl. cup (US)"));
        c.add(Unit::new("fluid_gill_us", "Fluid Gill (US)", US_GALLON / 32.0, "fl. gi (US)"));
        c.add(Unit::new("fluid_jack_us", "Fluid Jack (US)", US_GALLON / 64.0, "fl. jack (US)"));
        c.add(Unit::new("fluid_jig_shot_us", "Fluid Jig/Shot (US)", US_GALLON * 1.5 / 128.0, "fl. jig (US)"));
        c.add(Unit::new("fluid_ounce_us", "Fluid Ounce (US)", US_GALLON / 128.0, "fl. oz (US)"));
        c.add(Unit::new("fluid_tablespoon_us", "Fluid Tablespoon (US)", US_GALLON / 256.0, "fl. tbsp (US)"));
        c.add(Unit::new("fluid_teaspoon_us", "Fluid Teaspoon (US)", US_GALLON / 768.0, "fl. tsp (US)"));
        c.add(Unit::new("fluid_dram_us", "Fluid Dram (US)", US_GALLON / 1024.0, "fl. dr (US)"));
        c.add(Unit::new("fluid_minim_us", "Fluid Minim (US)", US_GALLON / (1024.0 * 60.0), "fl. min (US)"));

        // US customary dry measures
        c.add(Unit::new("dry_barrel_us", "Dry Barrel (US)", US_DRY_BARREL, "dry bbl (US)"));
        c.add(Unit::new("dry_bushel_us", "Dry Bushel (US)", US_DRY_BARREL * 8.0 / 26.25, "dry bu (US)"));
        c.add(Unit::new("dry_peck_us", "Dry Peck (US)", US_DRY_BARREL * 2.0 / 26.25, "dry pk (US)"));
        c.add(Unit::new("dry_gallon_us", "Dry Gallon (US)", US_DRY_BARREL / 26.25, "dry gal (US)"));
        c.add(Unit::new("dry_pottle_us", "Dry Pottle (US)", US_DRY_BARREL / 52.5, "dry pot (US)"));
        c.add(Unit::new("dry_quart_us", "Dry Quart (US)", US_DRY_BARREL / 105.0, "dry qt (US)"));
        c.add(Unit::new("dry_pint_us", "Dry Pint (US)", US_DRY_BARREL / 210.0, "dry pt (US)"));
        self.register(c);
    }

    fn register_time_units(&mut self) {
        let mut c = Category::linear("time", "Time");
        c.add(Unit::new("second", "Second", 1.0, "s"));
        c.add(Unit::new("millisecond", "Millisecond", 1e-3, "ms"));
        c.add(Unit::new("microsecond", "Microsecond", 1e-6, "μs"));
        c.add(Unit::new("shake", "Shake", 1e-8, "shake"));
        c.add(Unit::new("nanosecond", "Nanosecond", 1e-9, "ns"));
        c.add(Unit::new("picosecond", "Picosecond", 1e-12, "ps"));
        c.add(Unit::new("moment", "Moment", 90.0, "mmt"));
        c.add(Unit::new("minute", "Minute", 60.0, "min"));
        c.add(Unit::new("hour", "Hour", 3600.0, "h"));
        c.add(Unit::new("day", "Day", DAY, "d"));
        c.add(Unit::new("week", "Week", 604800.0, "wk"));
        c.add(Unit::new("fortnight", "Fortnight", 1209600.0, "fnt"));
        c.add(Unit::new("lunar_month", "Lunar Month", DAY * 29.5, "lun mo"));
        c.add(Unit::new("month", "Month", DAY * 365.2425 / 12.0, "mo"));
        c.add(Unit::new("lunar_year", "Lunar Year", DAY * 354.0, "lun yr"));
        c.add(Unit::new("common_year", "Common Year", DAY * 365.0, "com yr"));
        c.add(Unit::new("year", "Gregorian Year", DAY * 365.2425, "yr"));
        c.add(Unit::new("leap_year", "Leap Year", DAY * 366.0, "l yr"));
        c.add(Unit::new("olympiad", "Olympiad", DAY * 1461.0, "ol"));
        c.add(Unit::new("decade", "Decade", DAY * 3652.425, "dec"));
        c.add(Unit::new("silver_jubilee", "Silver Jubilee", DAY * 365.2425 * 25.0, "slv jb"));
        c.add(Unit::new("golden_jubilee", "Golden Jubilee", DAY * 365.2425 * 50.0, "gld jb"));
        c.add(Unit::new("diamond_jubilee", "Diamond Jubilee", DAY * 365.2425 * 60.0, "dia jb"));
        c.add(Unit::new("platinum_jubilee", "Platinum Jubilee", DAY * 365.2425 * 75.0, "plt jb"));
        c.add(Unit::new("century", "Century", DAY * 36524.25, "cent"));
        c.add(Unit::new("millenium", "Millenium", DAY * 365242.5, "mill"));
        c.add(Unit::new("eon", "Eon", DAY * 365.2425e9, "eon"));

        // Hindu units of time
        c.add(Unit::new("truti", "Truti", 1.0 / 324e5, "truti"));
        c.add(Unit::new("renu", "Renu", 1.0 / 54e4, "renu"));
        c.add(Unit::new("lav", "Lav", 1.0 / 9000.0, "lav"));
        c.add(Unit::new("likshak", "Likshak", 1.0 / 150.0, "likshak"));
        c.add(Unit::new("vipal_lipta", "Vipal/Lipta", 0.4, "lipta"));
        c.add(Unit::new("pran", "Pran", 4.0, "pran"));
        c.add(Unit::new("vighati_vinadi_pal", "Vighati/Vinadi/Pal", 24.0, "pal"));
        c.add(Unit::new("ghati_nadi_danda", "Ghati/Nadi/Danda", 1440.0, "ghati"));
        c.add(Unit::new("muhurta_kshana", "Muhurta/Kshana", 2880.0, "muh"));

        c.add(Unit::new("surya_truti", "Surya Truti", 1.6 / (18.0 * 30.0 * 100.0), "s. truti"));
        c.add(Unit::new("tatpara", "Tatpara", 1.6 / (18.0 * 30.0), "tat"));
        c.add(Unit::new("nimesha", "Nimesha", 1.6 / 18.0, "nim"));
        c.add(Unit::new("kaashtha", "Kaashta", 1.6, "ksht"));
        c.add(Unit::new("kala", "Kala", 48.0, "kala"));

        // Vedic
        c.add(Unit::new("paramanu", "Vedic Lava", 1.28 / 48600.0, "v. ksht"));
        c.add(Unit::new("anu", "Vedic Lava", 1.28 / 24300.0, "v. ksht"));
        c.add(Unit::new("trasarenu", "Trasarenu", 1.28 / 8100.0, "v. ksht"));
        c.add(Unit::new("vedic_truti", "Vedic Truti", 1.28 / 2700.0, "v. truti"));
        c.add(Unit::new("vedha", "Vedha", 1.28 / 27.0, "vedha"));
        c.add(Unit::new("vedic_lava", "Vedic Lava", 1.28 / 9.0, "v. ksht"));
        c.add(Unit::new("vedic_nimesha", "Vedic Nimesha", 1.28 / 3.0, "v. ksht"));
        c.add(Unit::new("vedic_kshana", "Vedic Kshana", 1.28, "v. kshn"));
        c.add(Unit::new("vedic_kaashtha", "Vedic Kaashtha", 6.4, "v. ksht"));
        c.add(Unit::new("laghu", "Laghu", 96.0, "laghu"));

        c.add(Unit::new("yaama", "Yaama", 10800.0, "yaam"));
        c.add(Unit::new("ahoratram_tithi", "Ahoratram/Tithi", DAY, "d"));
        c.add(Unit::new("paksha", "Paksha", DAY * 14.75, "pksh"));
        c.add(Unit::new("hindu_month", "Hindu Month", DAY * 29.5, "mo"));
        c.add(Unit::new("ritu", "Ritu", DAY * 59.0, "ritu"));
        c.add(Unit::new("aayana", "Aayana", DAY * 177.0, "aayana"));
        c.add(Unit::new("hindu_year", "Hindu Year", DAY * 354.0, "yr"));
        c.add(Unit::new("kalpa", "Kalpa", DAY * 354.0 * 4.32e9, "klp"));
        self.register(c);
    }

    fn register_energy_units(&mut self) {
        let mut c = Category::linear("energy", "Energy");
        c.add(Unit::new("joule", "Joule", 1.0, "J"));
        c.add(Unit::new("erg", "Erg", 1e-7, "erg"));
        c.add(Unit::new("kilojoule", "Kilojoule", 1000.0, "kJ"));
        c.add(Unit::new("calorie", "Calorie", 4.184, "cal"));
        c.add(Unit::new("kilocalorie", "Kilocalorie", 4184.0, "kcal"));
        c.add(Unit::new("milliwatt_hour", "Milliwatt Hour", 3.6, "mWh"));
        c.add(Unit::new("watt_hour", "Watt Hour", 3.6e3, "Wh"));
        c.add(Unit::new("kilowatt_hour", "Kilowatt Hour", 3.6e6, "kWh"));
        c.add(Unit::new("megawatt_hour", "Megawatt Hour", 3.6e9, "MWh"));
        c.add(Unit::new("gigawatt_hour", "Gigawatt Hour", 3.6e12, "GWh"));
        c.add(Unit::new("btu", "BTU", 1055.06, "BTU"));
        c.add(Unit::new("electron_volt", "Electron Volt", 1.602e-19, "eV"));
        self.register(c);
    }

    fn register_angle_units(&mut self) {
        let mut c = Category::linear("angle", "Angle");
        c.add(Unit::new("degree", "Degree", 1.0, "°"));
        c.add(Unit::new("radian", "Radian", 180.0 / PI, "rad"));
        c.add(Unit::new("gradian", "Gradian", 0.9, "grad"));
        c.add(Unit::new("sign", "Sign", 30.0, "sign"));
        c.add(Unit::new("octant", "Octant", 45.0, "oct"));
        c.add(Unit::new("hextant", "Sextant", 60.0, "hex"));
        c.add(Unit::new("quadrant", "Quadrant", 90.0, "quad"));
        c.add(Unit::new("turn", "Turn", 360.0, "turn"));
        c.add(Unit::new("mil_nato", "Mil (NATO)", 0.05625, "mil"));
        c.add(Unit::new("mil_soviet_union", "Mil (Soviet Union)", 0.06, "mil"));
        c.add(Unit::new("mil_sweden", "Mil (Sweden)", 4.0 / 70.0, "mil"));
        c.add(Unit::new("arcminute", "Arcminute", 1.0 / 60.0, "'"));
        c.add(Unit::new("arcsecond", "Arcsecond", 1.0 / 3600.0, "\""));
        self.register(c);
    }

    fn register_area_units(&mut self) {
        let mut c = Category::linear("area", "Area");
        c.add(Unit::new("square_meter", "Square Meter", 1.0, "sq. m"));
        c.add(Unit::new("square_kilometer", "Square Kilometer", 1e6, "sq. km"));
        c.add(Unit::new("square_centimeter", "Square Centimeter", 1e-4, "sq. cm"));
        c.add(Unit::new("square_millimeter", "Square Millimeter", 1e-6, "sq. mm"));
        c.add(Unit::new("barn", "Barn", 1e-28, "barn"));
        c.add(Unit::new("perch", "Perch", YARD.powi(2) * 30.25, "perch"));
        c.add(Unit::new("rood", "Rood", YARD.powi(2) * 1210.0, "rood"));
        c.add(Unit::new("guntha", "Guntha", YARD.powi(2) * 121.0, "guntha"));
        c.add(Unit::new("acre", "Acre", YARD.powi(2) * 4840.0, "acre"));
        c.add(Unit::new("square_chain", "Square Chain", YARD.powi(2) * 484.0, "sq. ch"));
        c.add(Unit::new("survey_township", "Survey Township", (YARD * 10560.0).powi(2), "twp"));
        c.add(Unit::new("square_league", "Square League", (YARD * 5280.0).powi(2), "sq. lea"));
        c.add(Unit::new("square_mile", "Square Mile / Section", (YARD * 1760.0).powi(2), "sq. mile"));
        c.add(Unit::new("square_yard", "Square Yard", YARD.powi(2), "sq. yd"));
        c.add(Unit::new("square_foot", "Square Foot", FOOT.powi(2), "sq. ft"));
        c.add(Unit::new("square_inch", "Square Inch", INCH.powi(2), "sq. in"));
        c.add(Unit::new("square_mil", "Square Mil", INCH.powi(2) * 1e-6, "sq. in"));
        c.add(Unit::new("are", "Are", 100.0, "are"));
        c.add(Unit::new("hectare", "Hectare", 10000.0, "ha"));
        self.register(c);
    }

    fn register_data_units(&mut self) {
        let mut c = Category::linear("data", "Data");
        c.add(Unit::new("byte", "Byte", 1.0, "B"));
        c.add(Unit::new("word", "Word", 2.0, "Wd"));
        c.add(Unit::new("dword", "QWord", 4.0, "DWd"));
        c.add(Unit::new("qword", "DWord", 8.0, "QWd"));
        // Binary multiples: 1 KB = 2^10 bytes
        c.add(Unit::new("kilobyte", "Kilobyte", 2.0_f64.powi(10), "KB"));
        c.add(Unit::new("megabyte", "Megabyte", 2.0_f64.powi(20), "MB"));
        c.add(Unit::new("gigabyte", "Gigabyte", 2.0_f64.powi(30), "GB"));
        c.add(Unit::new("terabyte", "Terabyte", 2.0_f64.powi(40), "TB"));
        c.add(Unit::new("petabyte", "Petabyte", 2.0_f64.powi(50), "PB"));
        c.add(Unit::new("exabyte", "Exabyte", 2.0_f64.powi(60), "EB"));
        c.add(Unit::new("zettabyte", "Zettabyte", 2.0_f64.powi(70), "ZB"));
        c.add(Unit::new("yottabyte", "Yottabyte", 2.0_f64.powi(80), "YB"));
        c.add(Unit::new("bit", "Bit", 0.125, "bit"));
        c.add(Unit::new("nibble", "Nibble", 0.5, "nibble"));
        c.add(Unit::new("kilobit", "Kilobit", 2.0_f64.powi(7), "Kbit"));
        c.add(Unit::new("megabit", "Megabit", 2.0_f64.powi(17), "Mbit"));
        c.add(Unit::new("gigabit", "Gigabit", 2.0_f64.powi(27), "Gbit"));
        c.add(Unit::new("terabit", "Terabit", 2.0_f64.powi(37), "Tbit"));
        c.add(Unit::new("petabit", "Petabit", 2.0_f64.powi(47), "Pbit"));
        c.add(Unit::new("exabit", "Exabit", 2.0_f64.powi(57), "Ebit"));
        c.add(Unit::new("zettabit", "Zettabit", 2.0_f64.powi(67), "Zbit"));
        c.add(Unit::new("yottabit", "Yottabit", 2.0_f64.powi(77), "Ybit"));
        self.register(c);
    }

    fn register_density_units(&mut self) {
        let mut c = Category::linear("density", "Density");
        c.add(Unit::new("kg_per_m3", "Kilogram per Cubic Meter", 1.0, "kg/m³"));
        c.add(Unit::new("g_per_cm3", "Gram per Cubic Centimeter", 1000.0, "g/cm³"));
        c.add(Unit::new("lb_per_ft3", "Pound per Cubic Foot", POUND / FOOT.powi(3), "lb/ft³"));
        c.add(Unit::new("oz_per_in3", "Ounce per Cubic Inch", OUNCE / INCH.powi(3), "oz/in³"));
        c.add(Unit::new("kg_per_l", "Kilogram per Liter", 1000.0, "kg/L"));
        self.register(c);
    }

    fn register_force_units(&mut self) {
        let mut c = Category::linear("force", "Force");
        c.add(Unit::new("newton", "Newton", 1.0, "N"));
        c.add(Unit::new("kilonewton", "Kilonewton", 1000.0, "kN"));
        c.add(Unit::new("pound_force", "Pound-force", 9.08665 * POUND, "lbf"));
        c.add(Unit::new("ounce_force", "Ounce-force", 9.08665 * OUNCE, "ozf"));
        c.add(Unit::new("dyne", "Dyne", 0.00001, "dyn"));
        c.add(Unit::new("gram_force", "Gram-force", 9.80665e-3, "gf"));
        c.add(Unit::new("kilogram_force", "Kilogram-force", 9.80665, "kgf"));
        self.register(c);
    }

    fn register_units_units(&mut self) {
        let mut c = Category::linear("units", "Units");
        c.add(Unit::new("piece", "Piece", 1.0, "pc"));
        c.add(Unit::new("dozen", "Dozen", 12.0, "dz"));
        c.add(Unit::new("gross", "Gross", 144.0, "gr"));
        c.add(Unit::new("great_gross", "Great Gross", 1728.0, "ggr"));
        c.add(Unit::new("score", "Score", 20.0, "score"));
        c.add(Unit::new("mole", "Mole", 6.023e23, "mole"));
        self.register(c);
    }

    fn register_speed_units(&mut self) {
        let mut c = Category::linear("speed", "Speed");
        c.add(Unit::new("meter_per_second", "Meter per Second", 1.0, "m/s"));
        c.add(Unit::new("kilometer_per_hour", "Kilometer per Hour", 1.0 / 3.6, "km/h"));
        c.add(Unit::new("mile_per_hour", "Mile per Hour", (INCH * 12.0 * 3.0 * 1760.0) / 3600.0, "mph"));
        c.add(Unit::new("knot", "Knot", 1.852 / 3.6, "kn"));
        c.add(Unit::new("foot_per_second", "Foot per Second", FOOT, "ft/s"));
        self.register(c);
    }

    fn register_power_units(&mut self) {
        let mut c = Category::linear("power", "Power");
        c.add(Unit::new("watt", "Watt", 1.0, "W"));
        c.add(Unit::new("kilowatt", "Kilowatt", 1000.0, "kW"));
        c.add(Unit::new("megawatt", "Megawatt", 1e6, "MW"));
        c.add(Unit::new("gigawatt", "Gigawatt", 1e9, "GW"));
        c.add(Unit::new("horsepower", "Horsepower", 746.0, "hp"));
        c.add(Unit::new("btu_per_hour", "BTU per Hour", 0.293072, "BTU/h"));
        c.add(Unit::new("calorie_per_second", "Calorie per Second", 4.184, "cal/s"));
        self.register(c);
    }

    fn register_pressure_units(&mut self) {
        let mut c = Category::linear("pressure", "Pressure");
        c.add(Unit::new("pascal", "Pascal", 1.0, "Pa"));
        c.add(Unit::new("kilopascal", "Kilopascal", 1000.0, "kPa"));
        c.add(Unit::new("bar", "Bar", 100000.0, "bar"));
        c.add(Unit::new("atmosphere", "Atmosphere", 101325.0, "atm"));
        c.add(Unit::new("psi", "Pound per Square Inch", 6894.76, "psi"));
        c.add(Unit::new("torr_mmhg", "Torr / Mercury Millimeter", 133.322, "Torr, mmHg"));
        self.register(c);
    }

    fn register_frequency_units(&mut self) {
        let mut c = Category::linear("frequency", "Frequency");
        c.add(Unit::new("hertz", "Hertz", 1.0, "Hz"));
        c.add(Unit::new("kilohertz", "Kilohertz", 1000.0, "kHz"));
        c.add(Unit::new("megahertz", "Megahertz", 1000000.0, "MHz"));
        c.add(Unit::new("gigahertz", "Gigahertz", 1000000000.0, "GHz"));
        c.add(Unit::new("terahertz", "Terahertz", 1000000000000.0, "THz"));
        c.add(Unit::new("rpm", "Revolutions per Minute", 1.0 / 60.0, "rpm"));
        self.register(c);
    }

    fn register_sound_units(&mut self) {
        let mut c = Category::linear("sound", "Sound Level");
        c.add(Unit::new("decibel", "Decibel", 1.0, "dB"));
        c.add(Unit::new("bel", "Bel", 10.0, "B"));
        c.add(Unit::new("neper", "Neper", 20.0 * LOG10_E, "Np"));
        self.register(c);
    }

    fn register_illuminance_units(&mut self) {
        let mut c = Category::linear("illuminance", "Illuminance");
        c.add(Unit::new("lux", "Lux", 1.0, "lx"));
        c.add(Unit::new("foot_candle", "Foot-candle", 10.764, "fc"));
        c.add(Unit::new("phot", "Phot", 10000.0, "ph"));
        c.add(Unit::new("nox", "Nox", 0.001, "nox"));
        self.register(c);
    }
}
