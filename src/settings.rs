//! Hardening preference table and `user.js` rendering
//!
//! Firefox reads `user.js` from the profile directory at startup and applies
//! every `user_pref` line in it on top of its own defaults. The table below is
//! written out in order, with each value copied verbatim: booleans and
//! integers are bare tokens, strings are stored with their quotes.
//!
//! Sources:
//! - <https://wiki.mozilla.org/Privacy/Privacy_Task_Force/firefox_about_config_privacy_tweeks>
//! - <https://github.com/pyllyukko/user.js/blob/master/user.js>
//! - <https://brainfucksec.github.io/firefox-hardening-guide>

/// First line of every generated file
pub const USER_JS_HEADER: &str = "// Created by ffhrd - github.com/jxdv/ffhrd";

/// One preference override
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferenceEntry {
    /// What the override does; not written to the file
    pub description: &'static str,
    /// Dotted preference name, e.g. `privacy.resistFingerprinting`
    pub key: &'static str,
    /// Literal JavaScript value as it should appear in the file
    pub value: &'static str,
}

const fn pref(
    description: &'static str,
    key: &'static str,
    value: &'static str,
) -> PreferenceEntry {
    PreferenceEntry {
        description,
        key,
        value,
    }
}

/// Overrides written by ffhrd, in output order
pub const HARDENING_PREFS: &[PreferenceEntry] = &[
    pref(
        "Set startup homepage to blank page",
        "browser.startup.page",
        "1",
    ),
    pref(
        "Isolate all browser identifier sources (e.g. cookies) to the first party domain, with the goal of preventing tracking across different domains",
        "privacy.firstparty.isolate",
        "true",
    ),
    pref(
        "Make FireFox more resistant to browser fingerprinting",
        "privacy.resistFingerprinting",
        "true",
    ),
    pref(
        "Disable offline cache",
        "browser.cache.offline.enable",
        "false",
    ),
    pref(
        "Stop FireFox from sending any pings when clicking on URLs",
        "browser.send_pings",
        "false",
    ),
    pref(
        "Disable temporary storing closed tabs (even with history turned off)",
        "browser.sessionstore.max_tabs_undo",
        "0",
    ),
    pref(
        "Disable preloading of autocomplete URLs",
        "browser.urlbar.speculativeConnect.enabled",
        "false",
    ),
    pref(
        "Do not reveal to website owners the battery status of your device",
        "dom.battery.enabled",
        "false",
    ),
    pref(
        "Block websites from getting notifications if you copy / paste / cut something from a web page",
        "dom.event.clipboardevents.enabled",
        "false",
    ),
    pref(
        "Disable geolocation",
        "geo.enabled",
        "false",
    ),
    pref(
        "Disable tracking of the status of your microphone and camera",
        "media.navigator.enabled",
        "false",
    ),
    pref(
        "Block third-party cookies",
        "network.cookie.cookieBehavior",
        "1",
    ),
    pref(
        "Delete cookies at the end of every session",
        "network.cookie.lifetimePolicy",
        "2",
    ),
    pref(
        "Send only the scheme, host, and port in the Referer header",
        "network.http.referer.trimmingPolicy",
        "2",
    ),
    pref(
        "Only send Referer header when the full hostnames match",
        "network.http.referer.XOriginPolicy",
        "2",
    ),
    pref(
        "When sending Referer across origins, only send scheme, host, and port in the Referer header of cross-origin requests",
        "network.http.referer.XOriginTrimmingPolicy",
        "2",
    ),
    pref(
        "Disable WebGL",
        "webgl.disabled",
        "true",
    ),
    pref(
        "Disable service workers",
        "dom.serviceWorkers.enabled",
        "false",
    ),
    pref(
        "Disable Web notifications",
        "dom.webnotifications.enabled",
        "false",
    ),
    pref(
        "Disable DOM timing API",
        "dom.enable_performance",
        "false",
    ),
    pref(
        "Disable resource timing API",
        "dom.enable_resource_timing",
        "false",
    ),
    pref(
        "Disable Web audio API",
        "dom.webaudio.enabled",
        "false",
    ),
    pref(
        "Don't log geolocation requests to the console if geolocation is enabled",
        "geo.wifi.logging.enabled",
        "false",
    ),
    pref(
        "Disable raw TCP sock support",
        "dom.mozTCPSocket.enabled",
        "false",
    ),
    pref(
        "Disable leaking network / browser connection information via JavaScript",
        "dom.netinfo.enabled",
        "false",
    ),
    pref(
        "Disable network API",
        "dom.network.enabled",
        "false",
    ),
    pref(
        "Disable WebRTC",
        "media.peerconnection.enabled",
        "false",
    ),
    pref(
        "Disable telephony API",
        "dom.telephony.enabled",
        "false",
    ),
    pref(
        "Disable 'beacon' asynchronous HTTP transfers",
        "beacon.enabled",
        "false",
    ),
    pref(
        "Disable copy to clipboard functionality via JavaScript",
        "dom.allow_cut_copy",
        "false",
    ),
    pref(
        "Disable speech recognition",
        "media.webspeech.recognition.enable",
        "false",
    ),
    pref(
        "Disable speech synthesis",
        "media.webspeech.synth.enabled",
        "false",
    ),
    pref(
        "Disable sensor API",
        "device.sensors.enabled",
        "false",
    ),
    pref(
        "Disable gamepad API to prevent USB enumeration",
        "dom.gamepad.enabled",
        "false",
    ),
    pref(
        "Disable VR devices API",
        "dom.vr.enabled",
        "false",
    ),
    pref(
        "Disable vibrator API",
        "dom.vibrator.enabled",
        "false",
    ),
    pref(
        "Disable archive API",
        "dom.archivereader.enabled",
        "false",
    ),
    pref(
        "Spoof dual-core CPU",
        "dom.maxHardwareConcurrency",
        "2",
    ),
    pref(
        "Disable WASM",
        "javascript.options.wasm",
        "false",
    ),
    pref(
        "Disable face detection",
        "camera.control.face_detection.enabled",
        "false",
    ),
    pref(
        "Set Accept-Language HTTP header to en-US regardless of FireFox localization",
        "intl.accept_languages",
        "\"en-US, en\"",
    ),
    pref(
        "Do not use OS values to determine locale, force using FireFox locale setting",
        "intl.locale.matchOS",
        "false",
    ),
    pref(
        "Do not use Mozilla-provided location-specific search engines",
        "browser.search.geoSpecificDefaults",
        "false",
    ),
    pref(
        "Do not automatically send selection to clipboard on some Linux distros",
        "clipboard.autocopy",
        "false",
    ),
    pref(
        "Prevent leaking application locale / date format using JavaScript",
        "javascript.use_us_english_locale",
        "true",
    ),
    pref(
        "Do not submit invalid URIs entered in the address bar to the default search engine",
        "keyword.enabled",
        "false",
    ),
    pref(
        "Do not trim HTTP off of URLs in the address bar",
        "browser.urlbar.trimURLs",
        "false",
    ),
    pref(
        "Do not try to guess domain names when entering an invalid domain name in the search bar",
        "browser.fixup.alternate.enabled",
        "false",
    ),
    pref(
        "Strip password from URLs if browser.fixup.alternate.enabled is enabled",
        "browser.fixup.hide_user_pass",
        "true",
    ),
    pref(
        "Send DNS request through SOCKS when SOCKS proxying is in use",
        "network.proxy.socks_remote_dns",
        "true",
    ),
    pref(
        "Do not monitor OS online / offline connection state",
        "network.manage-offline-status",
        "false",
    ),
    pref(
        "Enforce mixed active content blocking",
        "security.mixed_content.block_active_content",
        "true",
    ),
    pref(
        "Disable JAR from opening unsafe file types",
        "network.jar.open-unsafe-types",
        "false",
    ),
    pref(
        "Disable scripting of Plugins by JavaScript",
        "security.xpconnect.plugin.unrestricted",
        "false",
    ),
    pref(
        "Set file URI origin policy",
        "security.fileuri.strict_origin_policy",
        "true",
    ),
    pref(
        "Disable displaying JavaScript in history URLs",
        "browser.urlbar.filter.javascript",
        "true",
    ),
    pref(
        "Disable asm.js",
        "javascript.options.asmjs",
        "false",
    ),
    pref(
        "Disable Scalable Vector Graphics in OpenType fonts",
        "gfx.font_rendering.opentype_svg.enabled",
        "false",
    ),
    pref(
        "Disable video stats to reduce fingerpriting threat",
        "media.video_stats.enabled",
        "false",
    ),
    pref(
        "Do not use document specified fonts to prevent installed font enumeration",
        "browser.display.use_document_fonts",
        "0",
    ),
    pref(
        "Disable pocket extension",
        "extensions.pocket.enabled",
        "false",
    ),
    pref(
        "Disable screenshots extension",
        "extensions.Screenshots.disabled",
        "true",
    ),
    pref(
        "Disable PDJFS scripting",
        "pdfjs.enableScripting",
        "false",
    ),
    pref(
        "Enable containers and show the UI settings",
        "privacy.userContext.enabled",
        "true",
    ),
    pref(
        "Always get asked where to save files",
        "browser.download.useDownloadDir",
        "false",
    ),
    pref(
        "Disable adding downloads to system's 'recent documents' list",
        "browser.download.manager.addToRecentDocs",
        "false",
    ),
];

/// Render a single `user_pref(...)` statement
pub fn render_pref(entry: &PreferenceEntry) -> String {
    format!("user_pref(\"{}\", {});", entry.key, entry.value)
}

/// Render a complete `user.js` for `entries`
///
/// The result is the header comment, a blank line, then one statement per
/// entry. No escaping is applied.
///
/// ```rust
/// use ffhrd::{render_user_js, PreferenceEntry};
///
/// let entries = [PreferenceEntry {
///     description: "Disable geolocation",
///     key: "geo.enabled",
///     value: "false",
/// }];
/// assert_eq!(
///     render_user_js(&entries),
///     "// Created by ffhrd - github.com/jxdv/ffhrd\n\nuser_pref(\"geo.enabled\", false);\n"
/// );
/// ```
pub fn render_user_js(entries: &[PreferenceEntry]) -> String {
    let mut out = String::with_capacity(USER_JS_HEADER.len() + 2 + entries.len() * 64);
    out.push_str(USER_JS_HEADER);
    out.push_str("\n\n");
    for entry in entries {
        out.push_str(&render_pref(entry));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render_user_js(HARDENING_PREFS), render_user_js(HARDENING_PREFS));
    }

    #[test]
    fn test_line_count() {
        let rendered = render_user_js(HARDENING_PREFS);
        assert_eq!(rendered.lines().count(), HARDENING_PREFS.len() + 2);
        assert_eq!(HARDENING_PREFS.len(), 66);
    }

    #[test]
    fn test_layout() {
        let rendered = render_user_js(HARDENING_PREFS);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], USER_JS_HEADER);
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "user_pref(\"browser.startup.page\", 1);");
        assert_eq!(
            lines.last().copied(),
            Some("user_pref(\"browser.download.manager.addToRecentDocs\", false);")
        );
        for line in &lines[2..] {
            assert!(line.starts_with("user_pref(\"") && line.ends_with(");"), "{line}");
        }
    }

    #[test]
    fn test_values_are_not_requoted() {
        let rendered = render_user_js(HARDENING_PREFS);
        assert!(rendered.contains("user_pref(\"privacy.resistFingerprinting\", true);\n"));
        assert!(rendered.contains("user_pref(\"dom.maxHardwareConcurrency\", 2);\n"));
        assert!(rendered.contains("user_pref(\"intl.accept_languages\", \"en-US, en\");\n"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(render_user_js(&[]), format!("{}\n\n", USER_JS_HEADER));
    }

    #[test]
    fn test_table_is_well_formed() {
        let mut keys = HashSet::new();
        for entry in HARDENING_PREFS {
            assert!(!entry.description.is_empty());
            assert!(entry.key.contains('.'), "{}", entry.key);
            assert!(!entry.value.is_empty(), "{}", entry.key);
            assert!(keys.insert(entry.key), "duplicate key {}", entry.key);
        }
    }
}
