//! # OpenThings Parameter and Type Tables
//!
//! Every TLV record names a parameter (low 7 bits of its first byte) and a
//! value type (high nibble of its second byte). The id-to-name and
//! id-to-unit mappings below follow the Energenie OpenThings register, held
//! as compile-time tables.

// =============================================================================
// Parameter identifiers
// =============================================================================

pub const P_ALARM: u8 = 0x21;
pub const P_DEBUG_OUTPUT: u8 = 0x2D;
pub const P_IDENTIFY: u8 = 0x3F;
/// Command only
pub const P_SOURCE_SELECTOR: u8 = 0x40;
pub const P_WATER_DETECTOR: u8 = 0x41;
pub const P_GLASS_BREAKAGE: u8 = 0x42;
pub const P_CLOSURES: u8 = 0x43;
pub const P_DOOR_BELL: u8 = 0x44;
pub const P_ENERGY: u8 = 0x45;
pub const P_FALL_SENSOR: u8 = 0x46;
pub const P_GAS_VOLUME: u8 = 0x47;
pub const P_AIR_PRESSURE: u8 = 0x48;
pub const P_ILLUMINANCE: u8 = 0x49;
pub const P_LEVEL: u8 = 0x4C;
pub const P_RAINFALL: u8 = 0x4D;
pub const P_APPARENT_POWER: u8 = 0x50;
pub const P_POWER_FACTOR: u8 = 0x51;
pub const P_REPORT_PERIOD: u8 = 0x52;
pub const P_SMOKE_DETECTOR: u8 = 0x53;
pub const P_TIME_AND_DATE: u8 = 0x54;
pub const P_VIBRATION: u8 = 0x56;
pub const P_WATER_VOLUME: u8 = 0x57;
pub const P_WIND_SPEED: u8 = 0x58;
pub const P_GAS_PRESSURE: u8 = 0x61;
pub const P_BATTERY_LEVEL: u8 = 0x62;
pub const P_CO_DETECTOR: u8 = 0x63;
pub const P_DOOR_SENSOR: u8 = 0x64;
pub const P_EMERGENCY: u8 = 0x65;
pub const P_FREQUENCY: u8 = 0x66;
pub const P_GAS_FLOW_RATE: u8 = 0x67;
pub const P_RELATIVE_HUMIDITY: u8 = 0x68;
pub const P_CURRENT: u8 = 0x69;
pub const P_JOIN: u8 = 0x6A;
pub const P_LIGHT_LEVEL: u8 = 0x6C;
pub const P_MOTION_DETECTOR: u8 = 0x6D;
pub const P_OCCUPANCY: u8 = 0x6F;
pub const P_REAL_POWER: u8 = 0x70;
pub const P_REACTIVE_POWER: u8 = 0x71;
pub const P_ROTATION_SPEED: u8 = 0x72;
pub const P_SWITCH_STATE: u8 = 0x73;
pub const P_TEMPERATURE: u8 = 0x74;
pub const P_VOLTAGE: u8 = 0x76;
pub const P_WATER_FLOW_RATE: u8 = 0x77;
pub const P_WATER_PRESSURE: u8 = 0x78;
pub const P_TEST: u8 = 0xAA;

/// Parameter id, name, and unit ("" when the parameter is unitless).
static PARAMS: &[(u8, &str, &str)] = &[
    (P_ALARM, "ALARM", ""),
    (P_DEBUG_OUTPUT, "DEBUG_OUTPUT", ""),
    (P_IDENTIFY, "IDENTIFY", ""),
    (P_SOURCE_SELECTOR, "SOURCE_SELECTOR", ""),
    (P_WATER_DETECTOR, "WATER_DETECTOR", ""),
    (P_GLASS_BREAKAGE, "GLASS_BREAKAGE", ""),
    (P_CLOSURES, "CLOSURES", ""),
    (P_DOOR_BELL, "DOOR_BELL", ""),
    (P_ENERGY, "ENERGY", "kWh"),
    (P_FALL_SENSOR, "FALL_SENSOR", ""),
    (P_GAS_VOLUME, "GAS_VOLUME", "m3"),
    (P_AIR_PRESSURE, "AIR_PRESSURE", "mbar"),
    (P_ILLUMINANCE, "ILLUMINANCE", "Lux"),
    (P_LEVEL, "LEVEL", ""),
    (P_RAINFALL, "RAINFALL", "mm"),
    (P_APPARENT_POWER, "APPARENT_POWER", "VA"),
    (P_POWER_FACTOR, "POWER_FACTOR", ""),
    (P_REPORT_PERIOD, "REPORT_PERIOD", "s"),
    (P_SMOKE_DETECTOR, "SMOKE_DETECTOR", ""),
    (P_TIME_AND_DATE, "TIME_AND_DATE", "s"),
    (P_VIBRATION, "VIBRATION", ""),
    (P_WATER_VOLUME, "WATER_VOLUME", "l"),
    (P_WIND_SPEED, "WIND_SPEED", "m/s"),
    (P_GAS_PRESSURE, "GAS_PRESSURE", "Pa"),
    (P_BATTERY_LEVEL, "BATTERY_LEVEL", "V"),
    (P_CO_DETECTOR, "CO_DETECTOR", ""),
    (P_DOOR_SENSOR, "DOOR_SENSOR", ""),
    (P_EMERGENCY, "EMERGENCY", ""),
    (P_FREQUENCY, "FREQUENCY", "Hz"),
    (P_GAS_FLOW_RATE, "GAS_FLOW_RATE", "m3/hr"),
    (P_RELATIVE_HUMIDITY, "RELATIVE_HUMIDITY", "%"),
    (P_CURRENT, "CURRENT", "A"),
    (P_JOIN, "JOIN", ""),
    (P_LIGHT_LEVEL, "LIGHT_LEVEL", ""),
    (P_MOTION_DETECTOR, "MOTION_DETECTOR", ""),
    (P_OCCUPANCY, "OCCUPANCY", ""),
    (P_REAL_POWER, "REAL_POWER", "W"),
    (P_REACTIVE_POWER, "REACTIVE_POWER", "VAR"),
    (P_ROTATION_SPEED, "ROTATION_SPEED", "RPM"),
    (P_SWITCH_STATE, "SWITCH_STATE", ""),
    (P_TEMPERATURE, "TEMPERATURE", "C"),
    (P_VOLTAGE, "VOLTAGE", "V"),
    (P_WATER_FLOW_RATE, "WATER_FLOW_RATE", "l/hr"),
    (P_WATER_PRESSURE, "WATER_PRESSURE", "Pa"),
    (P_TEST, "TEST", ""),
];

// =============================================================================
// Value type tags (high nibble of the type/len byte)
// =============================================================================

pub const T_UINT: u8 = 0x00;
pub const T_UINT_BP4: u8 = 0x10;
pub const T_UINT_BP8: u8 = 0x20;
pub const T_UINT_BP12: u8 = 0x30;
pub const T_UINT_BP16: u8 = 0x40;
pub const T_UINT_BP20: u8 = 0x50;
pub const T_UINT_BP24: u8 = 0x60;
pub const T_CHAR: u8 = 0x70;
pub const T_SINT: u8 = 0x80;
pub const T_SINT_BP8: u8 = 0x90;
pub const T_SINT_BP16: u8 = 0xA0;
pub const T_SINT_BP24: u8 = 0xB0;
// 0xC0, 0xD0, 0xE0 reserved
pub const T_FLOAT: u8 = 0xF0;

static TYPE_NAMES: &[(u8, &str)] = &[
    (T_UINT, "UINT"),
    (T_UINT_BP4, "UINT_BP4"),
    (T_UINT_BP8, "UINT_BP8"),
    (T_UINT_BP12, "UINT_BP12"),
    (T_UINT_BP16, "UINT_BP16"),
    (T_UINT_BP20, "UINT_BP20"),
    (T_UINT_BP24, "UINT_BP24"),
    (T_CHAR, "CHAR"),
    (T_SINT, "SINT"),
    (T_SINT_BP8, "SINT_BP8"),
    (T_SINT_BP16, "SINT_BP16"),
    (T_SINT_BP24, "SINT_BP24"),
    (T_FLOAT, "FLOAT"),
];

/// Name for a parameter id, or `P_0xNN` when unknown.
pub fn param_name(pid: u8) -> String {
    PARAMS
        .iter()
        .find(|(id, _, _)| *id == pid)
        .map(|(_, name, _)| name.to_string())
        .unwrap_or_else(|| format!("P_0x{pid:02X}"))
}

/// Unit string for a parameter id; empty when unitless or unknown.
pub fn param_unit(pid: u8) -> &'static str {
    PARAMS
        .iter()
        .find(|(id, _, _)| *id == pid)
        .map(|(_, _, unit)| *unit)
        .unwrap_or("")
}

/// Name for a type tag, or `T_0xNN` when unknown.
pub fn type_name(tid: u8) -> String {
    TYPE_NAMES
        .iter()
        .find(|(id, _)| *id == tid)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| format!("T_0x{tid:02X}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_params() {
        assert_eq!(param_name(P_SWITCH_STATE), "SWITCH_STATE");
        assert_eq!(param_unit(P_SWITCH_STATE), "");
        assert_eq!(param_name(P_ENERGY), "ENERGY");
        assert_eq!(param_unit(P_ENERGY), "kWh");
        assert_eq!(param_name(P_TEMPERATURE), "TEMPERATURE");
        assert_eq!(param_unit(P_TEMPERATURE), "C");
        assert_eq!(param_unit(P_REACTIVE_POWER), "VAR");
    }

    #[test]
    fn test_unknown_param() {
        assert_eq!(param_name(0x7F), "P_0x7F");
        assert_eq!(param_unit(0x7F), "");
    }

    #[test]
    fn test_type_names() {
        assert_eq!(type_name(T_UINT), "UINT");
        assert_eq!(type_name(T_SINT_BP16), "SINT_BP16");
        assert_eq!(type_name(0xC0), "T_0xC0");
    }
}
