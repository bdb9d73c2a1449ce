//! Sample feed bodies shaped like the live Hong Kong feeds.

pub const CURRENT_WEATHER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
<channel>
<title>Current Weather Report</title>
<description>Hong Kong Observatory</description>
<item>
<title>Bulletin updated at 14:02 HKT 15/08/2023</title>
<description><![CDATA[
<img src="http://rss.weather.gov.hk/img/pic62.png" style="vertical-align: middle;"><br/>
<p>
At 2 p.m. at the Hong Kong Observatory :<br/>
Air temperature : 29 degrees Celsius<br/>
Relative Humidity : 84 per cent<br/>
During the past hour the mean UV Index recorded at King's Park : 2.5<br/>
Intensity of UV radiation : moderate
</p>
]]></description>
</item>
</channel>
</rss>"#;

pub const WARNING: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
<channel>
<title>Weather Warning Summary</title>
<item>
<title><![CDATA[Thunderstorm Warning (14:30 HKT 15/08/2023)]]></title>
<description><![CDATA[<p>The Thunderstorm Warning was issued at 2:30 p.m.</p>]]></description>
</item>
<item>
<title><![CDATA[Strong Monsoon Signal (09:15 HKT 15/08/2023)]]></title>
</item>
</channel>
</rss>"#;

pub const NO_WARNING: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
<channel>
<title>Weather Warning Summary</title>
<item>
<title>There is no warning in force.</title>
</item>
</channel>
</rss>"#;

pub const AIR_QUALITY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
<channel>
<title>Environmental Protection Department - AQHI</title>
<item>
<title>HKSAR Air Quality Health Index at : Sun, 15 Feb 2015 16:30:00 +0800 Current Condition</title>
<description><![CDATA[<p>General Stations: 4 to 7 (Health Risk: Moderate to High)</p><p>Roadside Stations: 6 to 10 (Health Risk: Moderate to Very High)</p>]]></description>
</item>
</channel>
</rss>"#;

pub const CONDITION: &str = r#"{
  "coord": {"lon": 114.16, "lat": 22.29},
  "weather": [
    {"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"},
    {"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}
  ],
  "main": {"temp": 29.1, "humidity": 84},
  "name": "Hong Kong"
}"#;
