//! Prompts for screenshot extraction

pub const EXTRACTION_PROMPT: &str = r#"You are reading a flight search screenshot.

Extract only what is visible. Do NOT guess.

Return:
- airline_name, airline_iata if visible
- flight_number if visible
- route if visible
- cabin: business / first / unknown
- aircraft_type if visible (A350-900, 777-300ER, etc.)
- cabin_text_found: exact cabin snippet
- raw_text: short transcription of key parts
- evidence: bullets of what you saw and where

Also detect cabin feature wording if visible:
- "lie-flat" / "lie flat"
- "suite"
- "door"
- "direct aisle access" / "direct-aisle access"

Set booleans in "markers" accordingly, and copy the exact snippet you saw into "markers_text".
If not visible, set all booleans false and markers_text as "".

If a field is not visible, return "" (empty string), except cabin can be "unknown"."#;

pub const SCREENSHOT_INSTRUCTION: &str = "Read this flight search screenshot.";
