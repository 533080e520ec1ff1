//! Platform Catalog - Fixed Asset Registry
//!
//! One group per (platform, asset kind) pair, compiled in. The catalog
//! is version-controlled data, never mutated at runtime.

use crate::error::GeneratorError;

/// Required source icon edge length (square).
pub const ICON_SOURCE_SIZE: u32 = 1024;
/// Required source splash edge length (square).
pub const SPLASH_SOURCE_SIZE: u32 = 2732;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Icon,
    Splash,
}

impl AssetKind {
    pub fn label(self) -> &'static str {
        match self {
            AssetKind::Icon => "icon",
            AssetKind::Splash => "splash",
        }
    }
}

/// How a single definition derives its output from the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Resize the square source to `size` x `size`.
    Resize { size: u32 },
    /// Center-crop the source to `width` x `height`.
    CenterCrop { width: u32, height: u32 },
}

/// One concrete output image spec.
#[derive(Debug, Clone, Copy)]
pub struct AssetDefinition {
    pub file_name: &'static str,
    pub transform: Transform,
    /// Android density qualifier, used as the manifest `density` attribute.
    pub density: Option<&'static str>,
    /// Definitions excluded from the printed manifest still get generated.
    pub in_manifest: bool,
}

/// All definitions for one (platform, asset kind) pair.
#[derive(Debug, Clone, Copy)]
pub struct AssetGroup {
    pub kind: AssetKind,
    pub platform: &'static str,
    pub subpath: &'static str,
    pub definitions: &'static [AssetDefinition],
}

const fn icon(file_name: &'static str, size: u32) -> AssetDefinition {
    AssetDefinition {
        file_name,
        transform: Transform::Resize { size },
        density: None,
        in_manifest: true,
    }
}

const fn density_icon(
    file_name: &'static str,
    size: u32,
    density: &'static str,
) -> AssetDefinition {
    AssetDefinition {
        file_name,
        transform: Transform::Resize { size },
        density: Some(density),
        in_manifest: true,
    }
}

const fn splash(file_name: &'static str, width: u32, height: u32) -> AssetDefinition {
    AssetDefinition {
        file_name,
        transform: Transform::CenterCrop { width, height },
        density: None,
        in_manifest: true,
    }
}

const fn density_splash(
    file_name: &'static str,
    width: u32,
    height: u32,
    density: &'static str,
) -> AssetDefinition {
    AssetDefinition {
        file_name,
        transform: Transform::CenterCrop { width, height },
        density: Some(density),
        in_manifest: true,
    }
}

static ANDROID_ICONS: AssetGroup = AssetGroup {
    kind: AssetKind::Icon,
    platform: "android",
    subpath: "android/icon",
    definitions: &[
        density_icon("drawable-ldpi-icon.png", 36, "ldpi"),
        density_icon("drawable-mdpi-icon.png", 48, "mdpi"),
        density_icon("drawable-hdpi-icon.png", 72, "hdpi"),
        density_icon("drawable-xhdpi-icon.png", 96, "xhdpi"),
        density_icon("drawable-xxhdpi-icon.png", 144, "xxhdpi"),
        density_icon("drawable-xxxhdpi-icon.png", 192, "xxxhdpi"),
    ],
};

static ANDROID_SPLASH: AssetGroup = AssetGroup {
    kind: AssetKind::Splash,
    platform: "android",
    subpath: "android/splash",
    definitions: &[
        density_splash("drawable-land-ldpi-screen.png", 320, 200, "land-ldpi"),
        density_splash("drawable-land-mdpi-screen.png", 480, 320, "land-mdpi"),
        density_splash("drawable-land-hdpi-screen.png", 800, 480, "land-hdpi"),
        density_splash("drawable-land-xhdpi-screen.png", 1280, 720, "land-xhdpi"),
        density_splash("drawable-land-xxhdpi-screen.png", 1600, 960, "land-xxhdpi"),
        density_splash("drawable-land-xxxhdpi-screen.png", 1920, 1280, "land-xxxhdpi"),
        density_splash("drawable-port-ldpi-screen.png", 200, 320, "port-ldpi"),
        density_splash("drawable-port-mdpi-screen.png", 320, 480, "port-mdpi"),
        density_splash("drawable-port-hdpi-screen.png", 480, 800, "port-hdpi"),
        density_splash("drawable-port-xhdpi-screen.png", 720, 1280, "port-xhdpi"),
        density_splash("drawable-port-xxhdpi-screen.png", 960, 1600, "port-xxhdpi"),
        density_splash("drawable-port-xxxhdpi-screen.png", 1280, 1920, "port-xxxhdpi"),
    ],
};

static IOS_ICONS: AssetGroup = AssetGroup {
    kind: AssetKind::Icon,
    platform: "ios",
    subpath: "ios/icon",
    definitions: &[
        icon("icon-20.png", 20),
        icon("icon-20@2x.png", 40),
        icon("icon-20@3x.png", 60),
        icon("icon-40.png", 40),
        icon("icon-40@2x.png", 80),
        icon("icon-50.png", 50),
        icon("icon-50@2x.png", 100),
        icon("icon-60.png", 60),
        icon("icon-60@2x.png", 120),
        icon("icon-60@3x.png", 180),
        icon("icon-72.png", 72),
        icon("icon-72@2x.png", 144),
        icon("icon-76.png", 76),
        icon("icon-76@2x.png", 152),
        icon("icon-83.5@2x.png", 167),
        icon("icon-small.png", 29),
        icon("icon-small@2x.png", 58),
        icon("icon-small@3x.png", 87),
        icon("icon.png", 57),
        icon("icon@2x.png", 114),
        // App Store marketing icon, referenced by Xcode, not config.xml.
        AssetDefinition {
            file_name: "icon-1024.png",
            transform: Transform::Resize { size: 1024 },
            density: None,
            in_manifest: false,
        },
    ],
};

static IOS_SPLASH: AssetGroup = AssetGroup {
    kind: AssetKind::Splash,
    platform: "ios",
    subpath: "ios/splash",
    definitions: &[
        splash("Default-568h@2x~iphone.png", 640, 1136),
        splash("Default-667h.png", 750, 1334),
        splash("Default-736h.png", 1242, 2208),
        splash("Default-Landscape-736h.png", 2208, 1242),
        splash("Default-Landscape@2x~ipad.png", 2048, 1536),
        splash("Default-Landscape~ipad.png", 1024, 768),
        splash("Default-Portrait@2x~ipad.png", 1536, 2048),
        splash("Default-Portrait~ipad.png", 768, 1024),
        splash("Default@2x~iphone.png", 640, 960),
        splash("Default~iphone.png", 320, 480),
        splash("Default@2x~universal~anyany.png", 2732, 2732),
    ],
};

static WINDOWS_ICONS: AssetGroup = AssetGroup {
    kind: AssetKind::Icon,
    platform: "windows",
    subpath: "windows/icon",
    definitions: &[
        icon("Square30x30Logo.scale-100.png", 30),
        icon("Square44x44Logo.scale-100.png", 44),
        icon("Square44x44Logo.scale-240.png", 106),
        icon("Square70x70Logo.scale-100.png", 70),
        icon("Square71x71Logo.scale-100.png", 71),
        icon("Square71x71Logo.scale-240.png", 170),
        icon("Square150x150Logo.scale-100.png", 150),
        icon("Square150x150Logo.scale-240.png", 360),
        icon("Square310x310Logo.scale-100.png", 310),
        icon("StoreLogo.scale-100.png", 50),
        icon("StoreLogo.scale-240.png", 120),
    ],
};

static WINDOWS_SPLASH: AssetGroup = AssetGroup {
    kind: AssetKind::Splash,
    platform: "windows",
    subpath: "windows/splash",
    definitions: &[
        splash("SplashScreen.scale-100.png", 620, 300),
        splash("SplashScreen.scale-125.png", 775, 375),
        splash("SplashScreen.scale-150.png", 930, 450),
        splash("SplashScreen.scale-200.png", 1240, 600),
        splash("SplashScreen.scale-400.png", 2480, 1200),
        splash("SplashScreenPhone.scale-240.png", 1152, 1920),
    ],
};

static BLACKBERRY10_ICONS: AssetGroup = AssetGroup {
    kind: AssetKind::Icon,
    platform: "blackberry10",
    subpath: "blackberry10/icon",
    definitions: &[
        icon("icon-90.png", 90),
        icon("icon-96.png", 96),
        icon("icon-110.png", 110),
        icon("icon-144.png", 144),
    ],
};

static ANDROID_GROUPS: [&AssetGroup; 2] = [&ANDROID_ICONS, &ANDROID_SPLASH];
static IOS_GROUPS: [&AssetGroup; 2] = [&IOS_ICONS, &IOS_SPLASH];
static WINDOWS_GROUPS: [&AssetGroup; 2] = [&WINDOWS_ICONS, &WINDOWS_SPLASH];
static BLACKBERRY10_GROUPS: [&AssetGroup; 1] = [&BLACKBERRY10_ICONS];

/// Supported platforms, in catalog order.
pub fn platform_names() -> &'static [&'static str] {
    &["android", "ios", "windows", "blackberry10"]
}

/// Asset groups for one platform, in generation order.
pub fn lookup(platform: &str) -> Result<&'static [&'static AssetGroup], GeneratorError> {
    match platform {
        "android" => Ok(&ANDROID_GROUPS),
        "ios" => Ok(&IOS_GROUPS),
        "windows" => Ok(&WINDOWS_GROUPS),
        "blackberry10" => Ok(&BLACKBERRY10_GROUPS),
        other => Err(GeneratorError::UnknownPlatform(other.to_string())),
    }
}
